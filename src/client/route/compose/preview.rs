//! Live preview of the message as Discord would show it.

use chrono::Utc;
use dioxus::prelude::*;

use crate::{
    client::{constant::SITE_NAME, model::session::Session},
    markup::transform,
    model::{
        composer::{parse_color, Composer, FieldDraft},
        message::AttachmentSlot,
        reference::ReferenceTable,
    },
};

#[component]
pub fn MessagePreview(composer: Signal<Composer>, session: Signal<Session>) -> Element {
    let draft = composer.read();
    let session = session.read();

    let (username, avatar_url) = match session.bot.data() {
        Some(bot) => (bot.username.clone(), bot.avatar_url.clone()),
        None => (SITE_NAME.to_string(), String::new()),
    };
    let content_html = transform(&draft.content, &session.table);
    let attachment = draft.preview_source(AttachmentSlot::Message);
    let buttons: Vec<_> = draft
        .buttons()
        .iter()
        .filter(|button| !button.label.is_empty())
        .map(|button| (button.id, button.label.clone(), button.link().map(String::from)))
        .collect();
    let time = Utc::now().format("%H:%M").to_string();

    rsx! {
        div {
            class: "preview",
            div {
                class: "preview-message",
                if avatar_url.is_empty() {
                    div { class: "preview-avatar preview-avatar-empty" }
                } else {
                    img { class: "preview-avatar", src: "{avatar_url}", alt: "{username}" }
                }
                div {
                    class: "preview-body",
                    div {
                        class: "preview-header",
                        span { class: "preview-username", "{username}" }
                        span { class: "preview-badge", "BOT" }
                        span { class: "preview-time", "Today at {time}" }
                    }
                    if !draft.content.is_empty() {
                        div {
                            class: "preview-content",
                            dangerous_inner_html: "{content_html}"
                        }
                    }
                    if let Some(src) = attachment {
                        img { class: "preview-attachment", src: "{src}" }
                    }
                    if draft.embed.enabled {
                        EmbedPreview { composer: (*draft).clone(), table: session.table.clone() }
                    }
                    if !buttons.is_empty() {
                        div {
                            class: "preview-buttons",
                            for (id, label, href) in buttons {
                                a {
                                    key: "{id}",
                                    class: "preview-button",
                                    href,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EmbedPreview(composer: Composer, table: ReferenceTable) -> Element {
    let embed = &composer.embed;
    let color = parse_color(&embed.color)
        .map(|color| format!("#{:06x}", color))
        .unwrap_or_else(|| "#1e1f22".to_string());
    let description_html = transform(&embed.description, &table);
    let author_icon = composer.preview_source(AttachmentSlot::AuthorIcon);
    let thumbnail = composer.preview_source(AttachmentSlot::Thumbnail);
    let image = composer.preview_source(AttachmentSlot::Image);
    let footer_icon = composer.preview_source(AttachmentSlot::FooterIcon);
    let title_link = composer
        .preview_source(AttachmentSlot::TitleUrl)
        .filter(|url| url.starts_with("http"));
    let timestamp = embed
        .timestamp
        .then(|| Utc::now().format("%d/%m/%Y %H:%M").to_string());
    let fields: Vec<FieldDraft> = embed
        .fields
        .iter()
        .filter(|field| !field.name.is_empty() || !field.value.is_empty())
        .cloned()
        .collect();

    rsx! {
        div {
            class: "preview-embed",
            style: "border-left-color: {color};",
            div {
                class: "preview-embed-main",
                if !embed.author.is_empty() {
                    div {
                        class: "preview-embed-author",
                        if let Some(src) = author_icon {
                            img { src: "{src}" }
                        }
                        span { "{embed.author}" }
                    }
                }
                if !embed.title.is_empty() {
                    div {
                        class: "preview-embed-title",
                        if let Some(href) = title_link {
                            a { href: "{href}", target: "_blank", rel: "noopener noreferrer", "{embed.title}" }
                        } else {
                            "{embed.title}"
                        }
                    }
                }
                if !embed.description.is_empty() {
                    div {
                        class: "preview-embed-description",
                        dangerous_inner_html: "{description_html}"
                    }
                }
                if !fields.is_empty() {
                    div {
                        class: "preview-embed-fields",
                        for field in fields {
                            div {
                                key: "{field.id}",
                                class: if field.inline { "preview-embed-field inline" } else { "preview-embed-field" },
                                div { class: "preview-embed-field-name", "{field.name}" }
                                div {
                                    class: "preview-embed-field-value",
                                    dangerous_inner_html: transform(&field.value, &table),
                                }
                            }
                        }
                    }
                }
                if let Some(src) = image {
                    img { class: "preview-embed-image", src: "{src}" }
                }
                if !embed.footer.is_empty() || timestamp.is_some() {
                    div {
                        class: "preview-embed-footer",
                        if let Some(src) = footer_icon {
                            img { src: "{src}" }
                        }
                        span { "{embed.footer}" }
                        if let Some(timestamp) = timestamp {
                            if !embed.footer.is_empty() {
                                span { " • " }
                            }
                            span { "{timestamp}" }
                        }
                    }
                }
            }
            if let Some(src) = thumbnail {
                img { class: "preview-embed-thumbnail", src: "{src}" }
            }
        }
    }
}
