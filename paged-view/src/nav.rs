//! One-based page helpers for user-facing navigation input.
//!
//! The provider core speaks zero-based indices; users type and read
//! one-based page numbers. These helpers live on the user-facing side of
//! that line and convert at the end.

/// Clamp a one-based page into a valid range.
pub fn clamp_one_based(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Convert a validated one-based page into a provider index.
pub fn to_page_index(one_based: usize) -> usize {
    one_based.saturating_sub(1)
}

/// Parse a one-based page argument.
///
/// Returns `Some(page)` when the value is valid (`>= 1`), otherwise `None`.
/// A missing argument means the first page.
pub fn parse_one_based_page(raw: Option<&str>) -> Option<usize> {
    match raw {
        Some(value) => value.parse::<usize>().ok().filter(|page| *page >= 1),
        None => Some(1),
    }
}

/// Resolve a modal-entered page using the modal's total-pages hint.
///
/// The hint can become stale if data changed after the modal opened. The
/// target page is bounded by both the current total and the hint range the
/// user actually saw.
pub fn resolve_modal_target_page(
    entered_page: usize,
    current_total_pages: usize,
    hinted_total_pages: usize,
) -> usize {
    let max_allowed_page = std::cmp::min(current_total_pages, std::cmp::max(hinted_total_pages, 1));
    clamp_one_based(entered_page, max_allowed_page)
}

#[cfg(test)]
mod tests {
    use super::{
        clamp_one_based, parse_one_based_page, resolve_modal_target_page, to_page_index,
    };

    #[test]
    fn clamping_bounds_both_ends() {
        assert_eq!(clamp_one_based(0, 5), 1);
        assert_eq!(clamp_one_based(3, 5), 3);
        assert_eq!(clamp_one_based(9, 5), 5);
        assert_eq!(clamp_one_based(9, 0), 1);
    }

    #[test]
    fn page_index_conversion_is_zero_based() {
        assert_eq!(to_page_index(1), 0);
        assert_eq!(to_page_index(3), 2);
        assert_eq!(to_page_index(0), 0);
    }

    #[test]
    fn missing_arguments_mean_the_first_page() {
        assert_eq!(parse_one_based_page(None), Some(1));
        assert_eq!(parse_one_based_page(Some("4")), Some(4));
        assert_eq!(parse_one_based_page(Some("0")), None);
        assert_eq!(parse_one_based_page(Some("four")), None);
    }

    #[test]
    fn stale_hints_bound_the_modal_target() {
        // Data shrank after the modal opened.
        assert_eq!(resolve_modal_target_page(9, 4, 9), 4);
        // Data grew; the user never saw the new pages.
        assert_eq!(resolve_modal_target_page(7, 10, 5), 5);
        assert_eq!(resolve_modal_target_page(2, 10, 5), 2);
    }
}
