//! Loading spinner component

use dioxus::prelude::*;

/// Spinner with a message beside it
#[component]
pub fn LoadingSpinner(
    #[props(default = "Cargando...".to_string())] message: String,
) -> Element {
    rsx! {
        div { class: "flex justify-center items-center py-12",
            div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-purple-500" }
            p { class: "ml-4 text-gray-300", "{message}" }
        }
    }
}
