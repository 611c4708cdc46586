use dioxus::prelude::*;

use crate::{client::model::session::Session, model::composer::Composer};

/// Discord's limit for message text.
const MAX_CONTENT_LENGTH: usize = 2000;

#[component]
pub fn ContentEditor(mut composer: Signal<Composer>, session: Signal<Session>) -> Element {
    let content = composer.read().content.clone();
    let length = content.chars().count();

    rsx! {
        div {
            class: "form-control",
            label {
                class: "label",
                "Message"
                span {
                    class: if length > MAX_CONTENT_LENGTH { "counter counter-over" } else { "counter" },
                    "{length}/{MAX_CONTENT_LENGTH}"
                }
            }
            textarea {
                class: "textarea",
                rows: 6,
                placeholder: "Write your message. **bold**, *italic*, __underline__, ~~strike~~, `code`",
                value: "{content}",
                oninput: move |evt| {
                    composer.write().content = evt.value();
                },
            }
            div {
                class: "pickers",
                MentionPicker { composer, session }
                EmojiPicker { composer, session }
            }
        }
    }
}

#[component]
fn MentionPicker(mut composer: Signal<Composer>, session: Signal<Session>) -> Element {
    let roles = session
        .read()
        .roles
        .data()
        .cloned()
        .unwrap_or_default();

    rsx! {
        select {
            class: "select select-small",
            value: "",
            onchange: move |evt| {
                let token = evt.value();
                if !token.is_empty() {
                    composer.write().insert_token(&token);
                }
            },
            option { value: "", "Insert mention..." }
            option { value: "@everyone", "@everyone" }
            option { value: "@here", "@here" }
            for role in roles {
                option {
                    key: "{role.id}",
                    value: format!("<@&{}>", role.id),
                    "@{role.name}"
                }
            }
        }
    }
}

#[component]
fn EmojiPicker(mut composer: Signal<Composer>, session: Signal<Session>) -> Element {
    let mut open = use_signal(|| false);
    let emojis = session
        .read()
        .emojis
        .data()
        .cloned()
        .unwrap_or_default();
    let no_emojis = emojis.is_empty();

    rsx! {
        div {
            class: "emoji-picker",
            button {
                class: "btn btn-small",
                r#type: "button",
                disabled: no_emojis,
                onclick: move |_| open.toggle(),
                "Emoji"
            }
            if open() {
                div {
                    class: "emoji-grid",
                    for emoji in emojis {
                        {
                            let token = emoji.token();
                            rsx! {
                                button {
                                    key: "{emoji.id}",
                                    class: "emoji-option",
                                    r#type: "button",
                                    title: ":{emoji.name}:",
                                    onclick: move |_| {
                                        composer.write().insert_token(&token);
                                        open.set(false);
                                    },
                                    img { src: "{emoji.url}", alt: "{emoji.name}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
