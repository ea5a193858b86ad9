pub mod api;
pub mod pages;
pub mod playback;

use dioxus::prelude::*;
use kodigo_common::contact::ContactMessage;
use pages::{Contact, ContactSuccess, Home, SiteLayout};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/contact")]
    Contact {},
    #[route("/contact-success?:..message")]
    ContactSuccess { message: ContactMessage },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
