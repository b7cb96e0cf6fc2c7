//! Provider-driven view assembly.

use tracing::debug;
use twilight_model::channel::message::component::Component;
use twilight_model::channel::message::embed::Embed;

use paged_core::{MenuContext, PagerError};
use paged_provider::PageProvider;

use crate::components::build_nav_components;

/// Assemble one rendered view (embed plus navigation buttons) from a
/// provider.
///
/// `current_page_index` must already be within `[0, page_count)`; callers
/// clamp user input with the helpers in [`crate::nav`] first.
pub async fn build_provider_view(
    provider: &dyn PageProvider,
    current_page_index: usize,
    command: &str,
    owner_user_id: u64,
    timeout_secs: u64,
) -> Result<(Embed, Vec<Component>), PagerError> {
    let menu = MenuContext::new(current_page_index, provider.page_count());
    debug!(
        command,
        page = menu.one_based_page(),
        total = menu.page_count(),
        "building paginated view"
    );

    let page = provider.get_page(&menu).await?;
    let components = build_nav_components(command, &menu, owner_user_id, timeout_secs);

    Ok((page.into_embed(), components))
}

#[cfg(test)]
mod tests {
    use paged_provider::ArrayPageProvider;

    use super::build_provider_view;

    #[tokio::test]
    async fn views_pair_the_rendered_page_with_nav_buttons() {
        let items: Vec<String> = (1..=25).map(|n| format!("entry {n}")).collect();
        let provider = ArrayPageProvider::with_items_per_page(&items, 10).unwrap();

        let (embed, components) = build_provider_view(&provider, 1, "help", 42, 60)
            .await
            .unwrap();

        assert_eq!(embed.footer.unwrap().text, "Page 2/3");
        assert!(embed.description.unwrap().starts_with("11. entry 11"));
        assert_eq!(components.len(), 1);
    }

    #[tokio::test]
    async fn single_page_views_carry_no_components() {
        let items = vec!["only".to_owned()];
        let provider = ArrayPageProvider::with_items_per_page(&items, 1).unwrap();

        let (embed, components) = build_provider_view(&provider, 0, "help", 42, 60)
            .await
            .unwrap();

        assert_eq!(embed.footer.unwrap().text, "Page 1/1");
        assert!(components.is_empty());
    }
}
