//! Music card component - pure view with callbacks

use crate::components::button::ChromelessButton;
use crate::components::icons::{ExternalLinkIcon, ImageIcon, PlayIcon, StopIcon};
use dioxus::prelude::*;
use kodigo_common::{ResultKind, SearchResultItem};

/// Link target for a card; `#` when the catalog gave no store link
pub fn card_href(item: &SearchResultItem) -> &str {
    item.external_link.as_deref().unwrap_or("#")
}

/// A card shows "stop" only while its own preview is the one playing
pub fn is_playing(current: Option<&str>, item: &SearchResultItem) -> bool {
    match current {
        Some(url) => item.preview_url.as_deref() == Some(url),
        None => false,
    }
}

/// Accessible label for the preview button
pub fn preview_label(is_playing: bool) -> &'static str {
    if is_playing {
        "Detener previsualización"
    } else {
        "Reproducir previsualización"
    }
}

/// One search result.
///
/// The whole card opens the store page in a new tab. The preview button sits on
/// top of the link, so its click must not bubble into a navigation.
#[component]
pub fn MusicCard(
    item: SearchResultItem,
    is_playing: bool,
    on_toggle_preview: EventHandler<String>,
) -> Element {
    let href = card_href(&item).to_string();
    let alt = format!("Portada de {} por {}", item.title, item.artist_name);
    let kind_label = match item.kind {
        ResultKind::Song => "Canción",
        ResultKind::MusicVideo => "Video musical",
    };

    let button_class = if is_playing {
        "absolute bottom-3 right-3 bg-pink-600 text-white rounded-full p-2 shadow-lg hover:bg-purple-700 transition-colors duration-200 z-10 ring-2 ring-white ring-offset-2 ring-offset-pink-600 animate-pulse"
    } else {
        "absolute bottom-3 right-3 bg-pink-600 text-white rounded-full p-2 shadow-lg hover:bg-purple-700 transition-colors duration-200 z-10"
    };

    rsx! {
        div {
            class: "bg-gray-900 rounded-lg shadow-lg overflow-hidden hover:scale-105 transition-transform duration-300 ease-in-out border border-gray-700 relative group",
            "data-testid": "music-card",
            "data-kind": item.kind.as_catalog_kind(),
            a {
                href: "{href}",
                target: "_blank",
                rel: "noopener noreferrer",
                div { class: "relative w-full h-48 sm:h-56 lg:h-64 bg-gray-800 flex items-center justify-center",
                    if item.artwork_url.is_empty() {
                        ImageIcon { class: "w-12 h-12 text-gray-500" }
                    } else {
                        img {
                            src: "{item.artwork_url}",
                            alt: "{alt}",
                            class: "w-full h-full object-cover rounded-t-lg",
                        }
                    }

                    if let Some(url) = item.preview_url.clone() {
                        ChromelessButton {
                            class: Some(button_class.to_string()),
                            aria_label: Some(preview_label(is_playing).to_string()),
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                evt.stop_propagation();
                                on_toggle_preview.call(url.clone());
                            },
                            if is_playing {
                                StopIcon { class: "h-6 w-6" }
                            } else {
                                PlayIcon { class: "h-6 w-6" }
                            }
                        }
                    }
                }
                div { class: "p-4",
                    h3 {
                        class: "text-xl font-semibold text-purple-400 mb-1 truncate",
                        title: "{item.title}",
                        "{item.title}"
                    }
                    p {
                        class: "text-gray-300 text-sm mb-2 truncate",
                        title: "{item.artist_name}",
                        "{item.artist_name}"
                    }
                    if !item.release_date.is_empty() {
                        p { class: "text-gray-400 text-xs", "Lanzamiento: {item.release_date}" }
                    }
                    p { class: "flex items-center gap-1 text-gray-500 text-xs mt-1 uppercase tracking-wide",
                        "{kind_label}"
                        if item.external_link.is_some() {
                            ExternalLinkIcon { class: "w-3 h-3" }
                        }
                    }
                }
            }
        }
    }
}
