//! Generic paginated-embed builders shared across the workspace.

use twilight_model::channel::message::embed::Embed;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFooterBuilder};

use crate::DEFAULT_EMBED_COLOR;
use crate::error::PagerError;

/// Build a standard paginated embed with a `Page {n}/{total}` footer.
pub fn build_paginated_embed(
    title: Option<&str>,
    description: impl Into<String>,
    page: usize,
    total_pages: usize,
) -> Result<Embed, PagerError> {
    build_paginated_embed_with_footer_note(title, description, page, total_pages, None)
}

/// Build a standard paginated embed with an optional footer suffix.
pub fn build_paginated_embed_with_footer_note(
    title: Option<&str>,
    description: impl Into<String>,
    page: usize,
    total_pages: usize,
    footer_note: Option<&str>,
) -> Result<Embed, PagerError> {
    let page = page.max(1);
    let total_pages = total_pages.max(1);

    let footer_text = match footer_note {
        Some(note) if !note.is_empty() => format!("Page {page}/{total_pages} • {note}"),
        _ => format!("Page {page}/{total_pages}"),
    };

    let mut builder = EmbedBuilder::new()
        .color(DEFAULT_EMBED_COLOR)
        .description(description)
        .footer(EmbedFooterBuilder::new(footer_text).build());

    if let Some(title) = title
        && !title.is_empty()
    {
        builder = builder.title(title);
    }

    Ok(builder.validate()?.build())
}

#[cfg(test)]
mod tests {
    use super::{build_paginated_embed, build_paginated_embed_with_footer_note};

    #[test]
    fn footer_carries_page_and_total() {
        let embed = build_paginated_embed(Some("Warnings"), "one\ntwo", 2, 5).unwrap();
        assert_eq!(embed.footer.unwrap().text, "Page 2/5");
        assert_eq!(embed.title.as_deref(), Some("Warnings"));
        assert_eq!(embed.description.as_deref(), Some("one\ntwo"));
    }

    #[test]
    fn footer_note_is_appended_after_the_page_counter() {
        let embed =
            build_paginated_embed_with_footer_note(None, "body", 1, 1, Some("filtered")).unwrap();
        assert_eq!(embed.footer.unwrap().text, "Page 1/1 • filtered");
        assert!(embed.title.is_none());
    }

    #[test]
    fn out_of_range_navigation_values_are_clamped_for_display() {
        let embed = build_paginated_embed(None, "body", 0, 0).unwrap();
        assert_eq!(embed.footer.unwrap().text, "Page 1/1");
    }
}
