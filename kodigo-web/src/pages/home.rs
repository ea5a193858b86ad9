use crate::api;
use crate::playback::WebPreviewService;
use dioxus::prelude::*;
use kodigo_common::{SearchState, DEFAULT_SEARCH_TERM};
use kodigo_ui::{
    AboutSection, HeroSection, PageContainer, SearchForm, SearchResultsView, SEARCH_SECTION_ID,
};
use tracing::{debug, warn};

fn scroll_to_search() {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(SEARCH_SECTION_ID))
    else {
        debug!("Search section not found");
        return;
    };
    el.scroll_into_view();
}

#[component]
pub fn Home() -> Element {
    let mut input = use_signal(|| DEFAULT_SEARCH_TERM.to_string());
    let mut search = use_signal(SearchState::starting);
    let client = use_hook(api::catalog_client);

    let current_preview: Signal<Option<String>> = use_context();
    let mut service: Signal<WebPreviewService> = use_context();

    let run_search = use_callback(move |term: String| {
        let Some(ticket) = search.write().begin(&term) else {
            debug!("Ignoring blank search term");
            return;
        };
        let client = client.clone();
        spawn(async move {
            let result = client.search(ticket.term()).await;
            match result {
                Err(ref e) if e.is_network() => warn!("Catalog unreachable: {}", e),
                Err(ref e) => warn!("Error fetching catalog results: {}", e),
                Ok(_) => {}
            }
            if !search.write().settle(ticket, result) {
                debug!("Discarded response for a superseded search");
            }
        });
    });

    // Default search, once per mount
    use_effect(move || run_search.call(DEFAULT_SEARCH_TERM.to_string()));

    // Leaving the page silences any preview
    use_drop(move || service.write().stop());

    let state = search.read().clone();

    rsx! {
        document::Title { "Inicio - Kodigo Music" }
        document::Meta {
            name: "description",
            content: "Descubre los últimos lanzamientos y artistas destacados de Kodigo Music.",
        }
        PageContainer {
            HeroSection { on_discover: move |_| scroll_to_search() }
            SearchForm {
                value: input(),
                on_input: move |value: String| input.set(value),
                on_submit: move |_| run_search.call(input()),
            }
            SearchResultsView {
                items: state.items,
                loading: state.loading,
                error: state.error,
                term: state.term,
                current_url: current_preview(),
                on_toggle_preview: move |url: String| service.write().toggle(&url),
            }
            AboutSection {}
        }
    }
}
