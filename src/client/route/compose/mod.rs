//! The composer page: a form on the left, a live preview on the right.

mod attachment;
mod buttons;
mod channel;
mod content;
mod embed;
mod fields;
mod preview;
mod status;

use dioxus::prelude::*;

use crate::{
    client::{component::Page, constant::SITE_NAME, model::session::Session},
    model::{composer::Composer, message::AttachmentSlot, socket::ClientEvent},
};

use attachment::AttachmentInput;
use buttons::ButtonsEditor;
use channel::ChannelSelect;
use content::ContentEditor;
use embed::EmbedEditor;
use preview::MessagePreview;
use status::StatusBanner;

#[component]
pub fn Compose() -> Element {
    let mut composer = use_signal(Composer::default);
    let mut session = use_signal(Session::default);

    let socket = use_coroutine(move |requests: UnboundedReceiver<ClientEvent>| async move {
        #[cfg(feature = "web")]
        crate::client::api::socket::run_composer_socket(requests, session, composer).await;

        #[cfg(not(feature = "web"))]
        drop(requests);
    });

    let on_send = move |_| {
        let request = session.write().begin_send(&composer.read());
        if let Some(event) = request {
            socket.send(event);
        }
    };

    let on_reset = move |_| {
        composer.write().reset();
    };

    let sending = session.read().sending;
    let connected = session.read().connected;

    rsx! {
        Title { "{SITE_NAME} | Composer" }
        Page {
            class: "compose",
            div {
                class: "compose-form",
                StatusBanner { session }
                ChannelSelect { composer, session }
                ContentEditor { composer, session }
                AttachmentInput { composer, session, slot: AttachmentSlot::Message }
                EmbedEditor { composer, session }
                ButtonsEditor { composer, session }
                div {
                    class: "compose-actions",
                    button {
                        class: "btn btn-primary",
                        disabled: sending || !connected,
                        onclick: on_send,
                        if sending { "Sending..." } else { "Send" }
                    }
                    button {
                        class: "btn",
                        disabled: sending,
                        onclick: on_reset,
                        "Reset"
                    }
                }
            }
            div {
                class: "compose-preview",
                MessagePreview { composer, session }
            }
        }
    }
}
