//! Error display component

use dioxus::prelude::*;

/// Error box for failures outside the results grid
#[component]
pub fn ErrorDisplay(message: String) -> Element {
    rsx! {
        div { class: "bg-red-900/60 border border-red-700 text-red-100 px-4 py-3 rounded mb-4", role: "alert",
            p { "{message}" }
        }
    }
}
