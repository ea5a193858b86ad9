use crate::playback::WebPreviewService;
use crate::Route;
use dioxus::prelude::*;
use kodigo_ui::{NavItem, SiteLayoutView};
use tracing::warn;
use wasm_bindgen::JsCast;

#[component]
pub fn SiteLayout() -> Element {
    let current_route = use_route::<Route>();

    // Current preview URL, read by the cards; written only by the service
    let current_preview = use_context_provider(|| Signal::new(None::<String>));
    let mut service =
        use_context_provider(|| Signal::new(WebPreviewService::new(current_preview)));

    let nav_items = vec![
        NavItem {
            id: "home".to_string(),
            label: "Inicio".to_string(),
            is_active: matches!(current_route, Route::Home {}),
        },
        NavItem {
            id: "contact".to_string(),
            label: "Contacto".to_string(),
            is_active: matches!(
                current_route,
                Route::Contact {} | Route::ContactSuccess { .. }
            ),
        },
    ];

    rsx! {
        SiteLayoutView {
            nav_items,
            on_nav_click: move |id: String| {
                match id.as_str() {
                    "home" => {
                        navigator().push(Route::Home {});
                    }
                    "contact" => {
                        navigator().push(Route::Contact {});
                    }
                    other => warn!("Unknown nav item: {}", other),
                }
            },
            extra: rsx! {
                audio {
                    class: "hidden",
                    preload: "none",
                    onmounted: move |evt: MountedEvent| {
                        let Some(el) = evt.data().downcast::<web_sys::Element>().cloned() else {
                            warn!("Mounted audio is not a DOM element");
                            return;
                        };
                        match el.dyn_into::<web_sys::HtmlMediaElement>() {
                            Ok(media) => service.write().set_audio_element(media),
                            Err(_) => warn!("Mounted audio is not a media element"),
                        }
                    },
                    onended: move |_| service.write().on_ended(),
                }
            },
            Outlet::<Route> {}
        }
    }
}
