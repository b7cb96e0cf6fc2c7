//! Array-backed page provider.

use std::fmt::Display;

use async_trait::async_trait;
use paged_core::{DEFAULT_ITEMS_PER_PAGE, MenuContext, Page, PagerError};

use crate::format::format_numbered_page;
use crate::provider::PageProvider;
use crate::window::Window;

/// Formats one window of items, plus navigation state, into a [`Page`].
pub type PageFormatter<T> =
    Box<dyn Fn(&MenuContext, Window<'_, T>) -> Result<Page, PagerError> + Send + Sync>;

/// Creates pages on demand from a borrowed slice of data.
///
/// The provider never copies or mutates the slice; it slices one window per
/// request and hands it to the formatter. It holds no request-scoped state,
/// so concurrent `get_page` calls against one instance are safe as long as
/// the owner does not mutate the backing storage underneath it.
pub struct ArrayPageProvider<'a, T> {
    items: &'a [T],
    items_per_page: usize,
    formatter: PageFormatter<T>,
}

impl<T> std::fmt::Debug for ArrayPageProvider<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArrayPageProvider")
            .field("item_count", &self.items.len())
            .field("items_per_page", &self.items_per_page)
            .finish_non_exhaustive()
    }
}

impl<'a, T: Display> ArrayPageProvider<'a, T> {
    /// Create a provider rendering ten numbered items per page.
    pub fn new(items: &'a [T]) -> Result<Self, PagerError> {
        Self::with_items_per_page(items, DEFAULT_ITEMS_PER_PAGE)
    }

    /// Create a provider with the default numbered-list formatter.
    pub fn with_items_per_page(items: &'a [T], items_per_page: usize) -> Result<Self, PagerError> {
        let formatter: PageFormatter<T> =
            Box::new(move |menu, window| format_numbered_page(menu, window, items_per_page));
        Self::with_formatter(items, items_per_page, formatter)
    }
}

impl<'a, T> ArrayPageProvider<'a, T> {
    /// Create a provider with a custom formatter.
    ///
    /// Fails when `items` is empty or `items_per_page` is outside
    /// `1..=items.len()`; a rejected provider is never constructed, so no
    /// page can ever be requested from invalid configuration.
    pub fn with_formatter(
        items: &'a [T],
        items_per_page: usize,
        formatter: PageFormatter<T>,
    ) -> Result<Self, PagerError> {
        if items.is_empty() {
            return Err(PagerError::EmptyItems);
        }

        if items_per_page == 0 || items_per_page > items.len() {
            return Err(PagerError::ItemsPerPageOutOfRange {
                items_per_page,
                item_count: items.len(),
            });
        }

        Ok(Self {
            items,
            items_per_page,
            formatter,
        })
    }

    /// The backing slice of data.
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    /// Number of items rendered per page.
    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// The window of items for one page, clipped at the end of the slice.
    fn window_for(&self, page_index: usize) -> Window<'a, T> {
        let offset = page_index * self.items_per_page;
        let remainder = self.items.len() - offset;
        let length = self.items_per_page.min(remainder);
        Window::new(&self.items[offset..offset + length], offset)
    }
}

#[async_trait]
impl<T: Send + Sync> PageProvider for ArrayPageProvider<'_, T> {
    fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.items_per_page)
    }

    async fn get_page(&self, menu: &MenuContext) -> Result<Page, PagerError> {
        let window = self.window_for(menu.current_page_index());
        (self.formatter)(menu, window)
    }
}
