use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaDiscord, Icon};

use crate::client::{constant::SITE_NAME, router::Route};

#[component]
pub fn Header() -> Element {
    rsx!(div {
        class: "header",
        Link {
            to: Route::Compose {},
            div {
                class: "header-brand",
                Icon {
                    width: 28,
                    height: 28,
                    icon: FaDiscord
                }
                p {
                    {SITE_NAME}
                }
            }
        }
        p {
            class: "header-subtitle",
            "Message composer"
        }
    })
}
