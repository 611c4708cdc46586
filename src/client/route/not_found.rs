use dioxus::prelude::*;

use crate::client::{component::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Title { "Not Found" }
        Page {
            class: "page-centered",
            div {
                h1 { "404" }
                p { "Nothing lives at /{path}" }
                Link {
                    to: Route::Compose {},
                    class: "btn",
                    "Back to the composer"
                }
            }
        }
    }
}
