use dioxus::prelude::*;

use crate::model::composer::Composer;

/// Discord's limit for fields in one embed.
const MAX_FIELDS: usize = 25;

#[component]
pub fn FieldsEditor(mut composer: Signal<Composer>) -> Element {
    let fields = composer.read().embed.fields.clone();
    let full = fields.len() >= MAX_FIELDS;

    rsx! {
        div {
            class: "fields",
            for field in fields {
                div {
                    key: "{field.id}",
                    class: "field-row",
                    input {
                        r#type: "text",
                        class: "input",
                        placeholder: "Field name",
                        value: "{field.name}",
                        oninput: move |evt| {
                            if let Some(draft) = composer.write().field_mut(field.id) {
                                draft.name = evt.value();
                            }
                        },
                    }
                    textarea {
                        class: "textarea",
                        rows: 2,
                        placeholder: "Field value",
                        value: "{field.value}",
                        oninput: move |evt| {
                            if let Some(draft) = composer.write().field_mut(field.id) {
                                draft.value = evt.value();
                            }
                        },
                    }
                    label {
                        class: "checkbox-label",
                        input {
                            r#type: "checkbox",
                            checked: field.inline,
                            onchange: move |evt| {
                                if let Some(draft) = composer.write().field_mut(field.id) {
                                    draft.inline = evt.checked();
                                }
                            },
                        }
                        "Inline"
                    }
                    button {
                        class: "btn btn-small",
                        r#type: "button",
                        onclick: move |_| composer.write().remove_field(field.id),
                        "Remove"
                    }
                }
            }
            button {
                class: "btn btn-small",
                r#type: "button",
                disabled: full,
                onclick: move |_| {
                    composer.write().add_field();
                },
                "Add field"
            }
        }
    }
}
