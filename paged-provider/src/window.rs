//! Non-owning page windows over a backing sequence.

/// A contiguous, non-owning view of one page's worth of items.
///
/// Computed per request and never persisted; the absolute offset travels
/// with the slice so formatters can render running numbers across pages.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a, T> {
    items: &'a [T],
    offset: usize,
}

impl<'a, T> Window<'a, T> {
    /// Build a window from a page's slice and its offset within the whole
    /// sequence.
    pub fn new(items: &'a [T], offset: usize) -> Self {
        Self { items, offset }
    }

    /// The items on this page, in sequence order.
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    /// Absolute index of the window's first item within the whole sequence.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the window holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
