use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, router::Route};

const COMPOSER_CSS: Asset = asset!("/assets/composer.css");

#[component]
pub fn App() -> Element {
    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Compose and post Discord messages as the server bot"
        }
        document::Link { rel: "stylesheet", href: COMPOSER_CSS }
        Router::<Route> {}
    }
}
