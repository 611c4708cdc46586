use dioxus::prelude::*;

use crate::{
    client::model::session::Session,
    model::{composer::Composer, message::AttachmentSlot},
};

use super::{attachment::AttachmentInput, fields::FieldsEditor};

#[component]
pub fn EmbedEditor(mut composer: Signal<Composer>, session: Signal<Session>) -> Element {
    let embed = composer.read().embed.clone();

    rsx! {
        div {
            class: "form-control embed-editor",
            label {
                class: "checkbox-label",
                input {
                    r#type: "checkbox",
                    checked: embed.enabled,
                    onchange: move |evt| {
                        composer.write().embed.enabled = evt.checked();
                    },
                }
                "Embed"
            }
            if embed.enabled {
                div {
                    class: "embed-grid",
                    label {
                        class: "label",
                        "Color"
                        input {
                            r#type: "color",
                            value: "{embed.color}",
                            oninput: move |evt| {
                                composer.write().embed.color = evt.value();
                            },
                        }
                    }
                    input {
                        r#type: "text",
                        class: "input",
                        placeholder: "Title",
                        value: "{embed.title}",
                        oninput: move |evt| {
                            composer.write().embed.title = evt.value();
                        },
                    }
                    textarea {
                        class: "textarea",
                        rows: 4,
                        placeholder: "Description",
                        value: "{embed.description}",
                        oninput: move |evt| {
                            composer.write().embed.description = evt.value();
                        },
                    }
                    UrlOrFile { composer, session, slot: AttachmentSlot::TitleUrl, placeholder: "Title link (https://...)" }
                    input {
                        r#type: "text",
                        class: "input",
                        placeholder: "Author name",
                        value: "{embed.author}",
                        oninput: move |evt| {
                            composer.write().embed.author = evt.value();
                        },
                    }
                    UrlOrFile { composer, session, slot: AttachmentSlot::AuthorIcon, placeholder: "Author icon URL" }
                    UrlOrFile { composer, session, slot: AttachmentSlot::Thumbnail, placeholder: "Thumbnail URL" }
                    UrlOrFile { composer, session, slot: AttachmentSlot::Image, placeholder: "Image URL" }
                    input {
                        r#type: "text",
                        class: "input",
                        placeholder: "Footer text",
                        value: "{embed.footer}",
                        oninput: move |evt| {
                            composer.write().embed.footer = evt.value();
                        },
                    }
                    UrlOrFile { composer, session, slot: AttachmentSlot::FooterIcon, placeholder: "Footer icon URL" }
                    label {
                        class: "checkbox-label",
                        input {
                            r#type: "checkbox",
                            checked: embed.timestamp,
                            onchange: move |evt| {
                                composer.write().embed.timestamp = evt.checked();
                            },
                        }
                        "Timestamp"
                    }
                    FieldsEditor { composer }
                }
            }
        }
    }
}

/// URL input paired with a file picker; a staged file hides the URL input.
#[component]
fn UrlOrFile(
    mut composer: Signal<Composer>,
    session: Signal<Session>,
    slot: AttachmentSlot,
    placeholder: &'static str,
) -> Element {
    let staged = composer.read().staged(slot).is_some();
    let url = composer
        .read()
        .slot_url(slot)
        .map(str::to_string)
        .unwrap_or_default();

    rsx! {
        div {
            class: "url-or-file",
            if !staged {
                input {
                    r#type: "url",
                    class: "input",
                    placeholder,
                    value: "{url}",
                    oninput: move |evt| {
                        if let Some(url) = composer.write().slot_url_mut(slot) {
                            *url = evt.value();
                        }
                    },
                }
            }
            AttachmentInput { composer, session, slot }
        }
    }
}
