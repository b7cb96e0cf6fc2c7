//! Navigation button components for paginated messages.

use twilight_model::channel::message::component::{ActionRow, Button, ButtonStyle, Component};

use paged_core::MenuContext;

use crate::token::{NavAction, build_custom_id, now_unix_secs};

/// Build previous/jump/next button components for a paginated message.
///
/// Single-page results get no components at all; edge pages get their
/// respective direction disabled.
pub fn build_nav_components(
    command: &str,
    menu: &MenuContext,
    user_id: u64,
    timeout_secs: u64,
) -> Vec<Component> {
    let page_count = menu.page_count();
    if page_count <= 1 {
        return vec![];
    }

    let current = menu.current_page_index();
    let expires_at = now_unix_secs().saturating_add(timeout_secs);

    let prev_index = current.saturating_sub(1);
    let next_index = (current + 1).min(page_count - 1);

    let nav_button = |label: &str, action: NavAction, target: usize, disabled: bool| {
        Component::Button(Button {
            id: None,
            custom_id: Some(build_custom_id(
                command, action, target, page_count, user_id, expires_at,
            )),
            disabled,
            emoji: None,
            label: Some(label.to_owned()),
            style: ButtonStyle::Secondary,
            url: None,
            sku_id: None,
        })
    };

    vec![Component::ActionRow(ActionRow {
        id: None,
        components: vec![
            nav_button("◀ Prev", NavAction::Prev, prev_index, current == 0),
            nav_button("*", NavAction::Jump, current, false),
            nav_button("Next ▶", NavAction::Next, next_index, current + 1 >= page_count),
        ],
    })]
}
