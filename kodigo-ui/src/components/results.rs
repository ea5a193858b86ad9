//! Search results section

use crate::components::helpers::{ErrorDisplay, LoadingSpinner};
use crate::components::music_card::{is_playing, MusicCard};
use dioxus::prelude::*;
use kodigo_common::SearchResultItem;

/// What the results section should show, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsDisplay {
    Loading,
    Error,
    Empty,
    Grid,
}

impl ResultsDisplay {
    pub fn pick(loading: bool, has_error: bool, item_count: usize) -> Self {
        if loading {
            ResultsDisplay::Loading
        } else if has_error {
            ResultsDisplay::Error
        } else if item_count == 0 {
            ResultsDisplay::Empty
        } else {
            ResultsDisplay::Grid
        }
    }
}

/// Results heading plus loading text, error text, empty message or card grid
#[component]
pub fn SearchResultsView(
    items: Vec<SearchResultItem>,
    loading: bool,
    error: Option<String>,
    /// Term of the last search, quoted in the empty message
    term: String,
    current_url: Option<String>,
    on_toggle_preview: EventHandler<String>,
) -> Element {
    let display = ResultsDisplay::pick(loading, error.is_some(), items.len());

    rsx! {
        section { class: "my-16",
            h2 { class: "text-4xl font-bold text-center text-purple-400 mb-10",
                "Resultados de Búsqueda 🎵"
            }
            match display {
                ResultsDisplay::Loading => rsx! {
                    LoadingSpinner { message: "Cargando resultados de búsqueda..." }
                },
                ResultsDisplay::Error => rsx! {
                    ErrorDisplay { message: error.clone().unwrap_or_default() }
                },
                ResultsDisplay::Empty => rsx! {
                    p { class: "text-center text-gray-300 text-lg",
                        "No se encontraron resultados con previsualización para \"{term}\"."
                    }
                },
                ResultsDisplay::Grid => rsx! {
                    div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-8",
                        for (index, item) in items.iter().enumerate() {
                            MusicCard {
                                key: "{index}",
                                item: item.clone(),
                                is_playing: is_playing(current_url.as_deref(), item),
                                on_toggle_preview,
                            }
                        }
                    }
                },
            }
        }
    }
}
