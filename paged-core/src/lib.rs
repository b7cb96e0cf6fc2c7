/// Generic paginated-embed builders shared across the workspace.
pub mod embed;
/// Error taxonomy for pagination setup and rendering.
pub mod error;
/// Boundary value types passed between the menu controller and providers.
pub mod menu;

pub use error::PagerError;
pub use menu::{MenuContext, Page};

/// Default embed color used across paginated views.
pub const DEFAULT_EMBED_COLOR: u32 = 0x90_54_30;

/// Maximum length of an embed description, imposed by the platform.
pub const EMBED_DESCRIPTION_LIMIT: usize = 4096;

/// Default number of items rendered per page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
