use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{Compose, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Compose {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
