use dioxus::prelude::*;

use crate::{
    client::model::{session::Session, status::StatusKind},
    model::composer::{Composer, MAX_BUTTONS},
};

/// Link buttons shown under the message.
#[component]
pub fn ButtonsEditor(mut composer: Signal<Composer>, mut session: Signal<Session>) -> Element {
    let buttons = composer.read().buttons().to_vec();
    let count = buttons.len();

    rsx! {
        div {
            class: "form-control",
            label {
                class: "label",
                "Link buttons"
                span { class: "counter", "{count}/{MAX_BUTTONS}" }
            }
            for button in buttons {
                div {
                    key: "{button.id}",
                    class: "button-row",
                    input {
                        r#type: "text",
                        class: "input",
                        placeholder: "Label",
                        value: "{button.label}",
                        oninput: move |evt| {
                            if let Some(draft) = composer.write().button_mut(button.id) {
                                draft.label = evt.value();
                            }
                        },
                    }
                    input {
                        r#type: "url",
                        class: "input",
                        placeholder: "https://",
                        value: "{button.url}",
                        oninput: move |evt| {
                            if let Some(draft) = composer.write().button_mut(button.id) {
                                draft.url = evt.value();
                            }
                        },
                    }
                    button {
                        class: "btn btn-small",
                        r#type: "button",
                        onclick: move |_| composer.write().remove_button(button.id),
                        "Remove"
                    }
                }
            }
            button {
                class: "btn btn-small",
                r#type: "button",
                onclick: move |_| {
                    let added = composer.write().add_button();
                    if let Err(err) = added {
                        session.write().set_status(StatusKind::Error, err.to_string());
                    }
                },
                "Add button"
            }
        }
    }
}
