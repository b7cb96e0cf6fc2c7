//! Provider contract consumed by menu controllers.

use async_trait::async_trait;
use paged_core::{MenuContext, Page, PagerError};

/// Capability that turns navigation state into a renderable page.
///
/// Declared async so providers backed by network or database sources fit the
/// same contract; in-memory providers simply resolve immediately. Requests
/// are independent and random-access: users may jump pages, so calls can
/// arrive repeatedly and in any order.
#[async_trait]
pub trait PageProvider: Send + Sync {
    /// Total number of pages this provider spans.
    ///
    /// Stable for a given instance unless the backing data is mutated
    /// externally, which is the caller's risk.
    fn page_count(&self) -> usize;

    /// Produce the page for the menu's current index.
    ///
    /// `menu.current_page_index()` is controller-validated to lie within
    /// `[0, page_count)`; implementations do not re-check it.
    async fn get_page(&self, menu: &MenuContext) -> Result<Page, PagerError>;
}
