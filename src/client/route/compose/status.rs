use dioxus::prelude::*;

use crate::client::model::session::Session;

#[cfg(feature = "web")]
use crate::client::constant::STATUS_HIDE_DELAY_MS;

#[component]
pub fn StatusBanner(session: Signal<Session>) -> Element {
    let status = session.read().status.clone();

    // Hide info and success banners after a delay
    #[cfg(feature = "web")]
    {
        let mut session = session;
        use_effect(move || {
            let Some(status) = session.read().status.clone() else {
                return;
            };
            if !status.auto_hides() {
                return;
            }

            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(STATUS_HIDE_DELAY_MS).await;
                session.write().hide_status(status.serial);
            });
        });
    }

    rsx! {
        if let Some(status) = status {
            div {
                class: status.class(),
                role: "status",
                "{status.message}"
            }
        }
    }
}
