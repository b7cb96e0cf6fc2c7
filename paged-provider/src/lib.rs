//! Page providers for paginated menus.
//!
//! A provider turns a page index into a renderable [`Page`](paged_core::Page).
//! The menu controller that owns navigation state holds one provider and asks
//! it for pages as the user moves; it never inspects the backing data itself.

mod array;
mod format;
mod provider;
mod window;

pub use array::{ArrayPageProvider, PageFormatter};
pub use format::format_numbered_page;
pub use provider::PageProvider;
pub use window::Window;
