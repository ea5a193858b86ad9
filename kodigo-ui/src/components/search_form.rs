//! Search form component

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::icons::SearchIcon;
use crate::components::text_input::TextInput;
use dioxus::prelude::*;

/// Anchor id of the search section, used by the hero call to action
pub const SEARCH_SECTION_ID: &str = "buscar";

/// Term input and submit button. Submission never reloads the page.
#[component]
pub fn SearchForm(
    value: String,
    on_input: EventHandler<String>,
    on_submit: EventHandler<()>,
) -> Element {
    rsx! {
        section { id: SEARCH_SECTION_ID, class: "my-10 px-4 max-w-2xl mx-auto",
            h2 { class: "text-3xl font-bold text-center text-purple-400 mb-6",
                "Encuentra Tu Música Favorita 🔍"
            }
            form {
                class: "flex flex-col sm:flex-row gap-4",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                div { class: "flex-grow",
                    TextInput {
                        value,
                        on_input,
                        placeholder: "Buscar artista, canción o género...",
                    }
                }
                Button {
                    variant: ButtonVariant::Accent,
                    size: ButtonSize::Medium,
                    r#type: "submit",
                    class: "inline-flex items-center justify-center gap-2".to_string(),
                    onclick: |_| {},
                    SearchIcon { class: "w-5 h-5" }
                    "Buscar"
                }
            }
        }
    }
}
