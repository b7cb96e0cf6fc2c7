//! Boundary value types passed between the menu controller and providers.

use twilight_model::channel::message::embed::Embed;

/// Snapshot of the navigation state a menu controller passes into a provider.
///
/// Providers and formatters read the current index and the total page count
/// from here and nothing else; the controller owns all other session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuContext {
    current_page_index: usize,
    page_count: usize,
}

impl MenuContext {
    /// Create a context for a zero-based page index.
    ///
    /// The controller is responsible for keeping `current_page_index` within
    /// `[0, page_count)`; providers do not re-validate it.
    pub fn new(current_page_index: usize, page_count: usize) -> Self {
        Self {
            current_page_index,
            page_count,
        }
    }

    /// Zero-based index of the page being requested.
    pub fn current_page_index(&self) -> usize {
        self.current_page_index
    }

    /// Total number of pages the provider spans.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// One-based page number for user-facing text.
    pub fn one_based_page(&self) -> usize {
        self.current_page_index + 1
    }
}

/// The rendered unit handed back to the menu controller.
///
/// Opaque to providers once produced; the controller sends it as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    embed: Embed,
}

impl Page {
    /// Wrap a rendered embed as a page.
    pub fn new(embed: Embed) -> Self {
        Self { embed }
    }

    /// Borrow the rendered embed.
    pub fn embed(&self) -> &Embed {
        &self.embed
    }

    /// Unwrap the rendered embed.
    pub fn into_embed(self) -> Embed {
        self.embed
    }
}
