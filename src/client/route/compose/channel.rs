use dioxus::prelude::*;

use crate::{
    client::model::{cache::Cache, session::Session},
    model::composer::Composer,
};

#[component]
pub fn ChannelSelect(mut composer: Signal<Composer>, session: Signal<Session>) -> Element {
    let selected = composer.read().channel_id.clone().unwrap_or_default();
    let channels = session.read().channels.clone();

    rsx! {
        div {
            class: "form-control",
            label {
                class: "label",
                "Channel"
            }
            match channels {
                Cache::Fetched(channels) => rsx! {
                    select {
                        class: "select",
                        value: "{selected}",
                        onchange: move |evt| {
                            let value = evt.value();
                            composer.write().channel_id = (!value.is_empty()).then_some(value);
                        },
                        option { value: "", disabled: true, "Select a channel" }
                        for channel in channels {
                            option {
                                key: "{channel.id}",
                                value: "{channel.id}",
                                selected: channel.id == selected,
                                "#{channel.name}"
                            }
                        }
                    }
                },
                Cache::Error(error) => rsx! {
                    p { class: "field-error", "Could not load channels: {error}" }
                },
                _ => rsx! {
                    select {
                        class: "select",
                        disabled: true,
                        option { "Loading channels..." }
                    }
                },
            }
        }
    }
}
