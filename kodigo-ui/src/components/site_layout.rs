//! Site layout view component
//!
//! Header with navigation, main content slot and footer. Navigation is reported
//! through `on_nav_click`; the app maps item ids to routes.

use crate::components::icons::MusicIcon;
use dioxus::prelude::*;

/// Navigation item for the header
#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub is_active: bool,
}

#[component]
pub fn SiteLayoutView(
    nav_items: Vec<NavItem>,
    on_nav_click: EventHandler<String>,
    /// Main content (typically the router outlet)
    children: Element,
    /// Elements that live outside the content flow, such as the audio element
    #[props(default)]
    extra: Option<Element>,
) -> Element {
    rsx! {
        div { class: "min-h-screen flex flex-col bg-gray-950 text-gray-100",
            header { class: "sticky top-0 z-30 bg-gray-950/90 backdrop-blur border-b border-gray-800",
                nav { class: "container mx-auto flex items-center justify-between px-6 py-4",
                    button {
                        class: "flex items-center gap-2 text-2xl font-extrabold text-purple-400",
                        onclick: move |_| on_nav_click.call("home".to_string()),
                        MusicIcon { class: "w-7 h-7" }
                        "Kodigo Music"
                    }
                    div { class: "flex items-center gap-6",
                        for item in nav_items {
                            button {
                                key: "{item.id}",
                                class: if item.is_active { "text-pink-500 font-semibold" } else { "text-gray-300 hover:text-white transition-colors" },
                                onclick: {
                                    let id = item.id.clone();
                                    move |_| on_nav_click.call(id.clone())
                                },
                                "{item.label}"
                            }
                        }
                    }
                }
            }
            main { class: "flex-1", {children} }
            footer { class: "border-t border-gray-800 py-8 text-center text-gray-400 text-sm",
                p { "© Kodigo Music. Todos los derechos reservados." }
            }
            if let Some(ex) = extra {
                {ex}
            }
        }
    }
}
