use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::model::{session::Session, status::StatusKind},
    model::{
        composer::{resolve_media_type, Composer, StagedFile},
        message::AttachmentSlot,
    },
};

/// File picker for one attachment slot.
///
/// Shows the staged file name with a remove button once a file is chosen.
#[component]
pub fn AttachmentInput(
    mut composer: Signal<Composer>,
    mut session: Signal<Session>,
    slot: AttachmentSlot,
) -> Element {
    let enabled = composer.read().slot_enabled(slot);
    let staged = composer.read().staged(slot).map(|file| file.name.clone());
    let upload_label = format!("Upload {}", slot.label().to_lowercase());

    if !enabled {
        return rsx! {};
    }

    let on_file_change = move |evt: Event<FormData>| {
        spawn(async move {
            let files = evt.files();
            let Some(file) = files.first() else {
                return;
            };
            let name = file.name();
            let media_type = resolve_media_type(file.content_type(), &name);

            let bytes = match file.read_bytes().await {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::error!("Failed to read {}: {:?}", name, e);
                    session
                        .write()
                        .set_status(StatusKind::Error, format!("Could not read {}", name));
                    return;
                }
            };

            let file = StagedFile::from_bytes(name.clone(), media_type, &bytes);
            if let Err(err) = composer.write().stage(slot, file) {
                session.write().set_status(StatusKind::Error, err.to_string());
            }
        });
    };

    rsx! {
        div {
            class: "attachment",
            if let Some(name) = staged {
                span { class: "attachment-name", "{name}" }
                button {
                    class: "btn btn-small",
                    r#type: "button",
                    onclick: move |_| composer.write().unstage(slot),
                    "Remove"
                }
            } else {
                label {
                    class: "btn btn-small",
                    "{upload_label}"
                    input {
                        r#type: "file",
                        accept: "image/*",
                        style: "display: none;",
                        onchange: on_file_change,
                    }
                }
            }
        }
    }
}
