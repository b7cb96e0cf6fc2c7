//! Pure view composition for paged menus.
//!
//! Everything here stays off the network: these helpers shape buttons,
//! tokens, and embed-plus-component views that a menu controller then sends
//! through whatever transport it owns.

/// Default timeout for button-based pagination sessions.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Navigation button components for paginated messages.
pub mod components;
/// One-based page helpers for user-facing navigation input.
pub mod nav;
/// Stateless pagination token encoding, parsing, and validation.
pub mod token;
/// Provider-driven view assembly.
pub mod view;

pub use components::build_nav_components;
pub use nav::{clamp_one_based, parse_one_based_page, resolve_modal_target_page, to_page_index};
pub use token::{NavAction, PaginationToken, TokenValidationError, validate_custom_id};
pub use view::build_provider_view;
