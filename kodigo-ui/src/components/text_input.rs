//! Reusable text input components

use dioxus::prelude::*;

fn field_class(invalid: bool) -> String {
    let border = if invalid {
        "border-red-500"
    } else {
        "border-gray-700"
    };
    format!("w-full px-4 py-2 bg-gray-800 border {border} rounded-md text-white placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-purple-500 transition-all duration-200")
}

/// Single-line input with consistent styling
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] id: Option<&'static str>,
    /// Draw a red border
    #[props(default)]
    invalid: bool,
) -> Element {
    rsx! {
        input {
            r#type: input_type,
            class: field_class(invalid),
            id,
            value: "{value}",
            placeholder,
            aria_invalid: if invalid { Some("true") } else { None },
            oninput: move |e| on_input.call(e.value()),
        }
    }
}

/// Multi-line counterpart of [`TextInput`]
#[component]
pub fn TextArea(
    value: String,
    on_input: EventHandler<String>,
    #[props(default = 4)] rows: u32,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] id: Option<&'static str>,
    #[props(default)] invalid: bool,
) -> Element {
    rsx! {
        textarea {
            class: field_class(invalid),
            id,
            rows: "{rows}",
            value: "{value}",
            placeholder,
            aria_invalid: if invalid { Some("true") } else { None },
            oninput: move |e| on_input.call(e.value()),
        }
    }
}
