//! Error taxonomy for pagination setup and rendering.
//!
//! Every variant signals an integrator mistake, not a transient condition:
//! errors are local, synchronous, and non-retryable, and propagate to the
//! caller unmodified.

use thiserror::Error;
use twilight_validate::embed::EmbedValidationError;

/// Errors raised by page providers and the default formatter.
#[derive(Debug, Error)]
pub enum PagerError {
    /// The backing item sequence was empty at construction.
    #[error("pagination requires a non-empty item sequence")]
    EmptyItems,

    /// `items_per_page` fell outside `1..=item_count` at construction.
    #[error("items_per_page must be between 1 and {item_count}, got {items_per_page}")]
    ItemsPerPageOutOfRange {
        items_per_page: usize,
        item_count: usize,
    },

    /// The per-item character budget of the default formatter came out
    /// non-positive. Lower `items_per_page` or install a custom formatter.
    #[error("{items_per_page} items per page leaves no description budget per item")]
    ItemDensityTooHigh { items_per_page: usize },

    /// The rendered page violated an embed limit.
    #[error(transparent)]
    EmbedValidation(#[from] EmbedValidationError),
}
