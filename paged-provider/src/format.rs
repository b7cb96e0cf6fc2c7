//! Default numbered-list formatter with budget-based truncation.

use std::fmt::Display;

use paged_core::{EMBED_DESCRIPTION_LIMIT, MenuContext, Page, PagerError};

use crate::window::Window;

/// Format a window of items into a numbered-list page.
///
/// Every item gets a proportional share of the description budget derived
/// from `items_per_page`, not from the window's actual length, so truncation
/// stays constant across pages even when the final window is partial.
/// Truncation counts characters, never bytes, and appends a single `…`.
pub fn format_numbered_page<T: Display>(
    menu: &MenuContext,
    window: Window<'_, T>,
    items_per_page: usize,
) -> Result<Page, PagerError> {
    if items_per_page == 0 {
        return Err(PagerError::ItemDensityTooHigh { items_per_page });
    }

    let mut lines = Vec::with_capacity(window.len());

    for (local_index, item) in window.items().iter().enumerate() {
        let prefix = format!("{}. ", window.offset() + local_index + 1);
        // Each line also spends its newline and potential ellipsis.
        let budget = (EMBED_DESCRIPTION_LIMIT / items_per_page) as isize
            - prefix.len() as isize
            - 2;
        if budget <= 0 {
            return Err(PagerError::ItemDensityTooHigh { items_per_page });
        }
        let max_item_length = budget as usize;

        let mut text = item.to_string();
        if text.chars().count() > max_item_length {
            text = text.chars().take(max_item_length).collect();
            text.push('…');
        }

        lines.push(format!("{prefix}{text}"));
    }

    let embed = paged_core::embed::build_paginated_embed(
        None,
        lines.join("\n"),
        menu.one_based_page(),
        menu.page_count(),
    )?;

    Ok(Page::new(embed))
}

#[cfg(test)]
mod tests {
    use paged_core::{EMBED_DESCRIPTION_LIMIT, MenuContext, PagerError};

    use super::format_numbered_page;
    use crate::window::Window;

    fn description(page: paged_core::Page) -> String {
        page.into_embed().description.unwrap_or_default()
    }

    #[test]
    fn numbers_continue_across_pages() {
        let items = ["alpha", "beta", "gamma"];
        let menu = MenuContext::new(2, 4);
        let page = format_numbered_page(&menu, Window::new(&items, 6), 3).unwrap();
        assert_eq!(description(page), "7. alpha\n8. beta\n9. gamma");
    }

    #[test]
    fn footer_reflects_the_menu_context() {
        let items = ["only"];
        let menu = MenuContext::new(1, 3);
        let page = format_numbered_page(&menu, Window::new(&items, 1), 1).unwrap();
        assert_eq!(page.embed().footer.as_ref().unwrap().text, "Page 2/3");
    }

    #[test]
    fn overlong_items_truncate_to_the_exact_budget_plus_ellipsis() {
        let per_page = 2;
        let max_item_length = EMBED_DESCRIPTION_LIMIT / per_page - "1. ".len() - 2;
        let long = "x".repeat(max_item_length + 500);

        let items = [long];
        let menu = MenuContext::new(0, 1);
        let page = format_numbered_page(&menu, Window::new(&items, 0), per_page).unwrap();

        let line = description(page);
        let rendered = line.strip_prefix("1. ").unwrap();
        assert_eq!(rendered.chars().count(), max_item_length + 1);
        assert!(rendered.ends_with('…'));
    }

    #[test]
    fn items_within_budget_are_untouched() {
        let items = ["short"];
        let menu = MenuContext::new(0, 1);
        let page = format_numbered_page(&menu, Window::new(&items, 0), 10).unwrap();
        assert_eq!(description(page), "1. short");
    }

    #[test]
    fn truncation_is_character_safe_for_multibyte_text() {
        let per_page = 512;
        let max_item_length = EMBED_DESCRIPTION_LIMIT / per_page - "1. ".len() - 2;
        let long = "ß".repeat(max_item_length + 10);

        let items = [long];
        let menu = MenuContext::new(0, 1);
        let page = format_numbered_page(&menu, Window::new(&items, 0), per_page).unwrap();

        let line = description(page);
        let rendered = line.strip_prefix("1. ").unwrap();
        assert_eq!(rendered.chars().count(), max_item_length + 1);
    }

    #[test]
    fn too_dense_pages_are_rejected_before_emitting_content() {
        // 4096 / 2048 = 2 characters per slot, which the prefix alone exceeds.
        let items = vec!["x"; 2048];
        let menu = MenuContext::new(0, 1);
        let err = format_numbered_page(&menu, Window::new(&items, 0), 2048).unwrap_err();
        assert!(matches!(
            err,
            PagerError::ItemDensityTooHigh {
                items_per_page: 2048
            }
        ));
    }
}
