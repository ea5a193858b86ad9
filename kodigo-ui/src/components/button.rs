//! Reusable button component

use dioxus::prelude::*;

/// Chromeless button component - provides accessibility and base functionality
/// without visual styling. Used internally by Button and for overlay buttons.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            r#type,
            disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Purple pill - hero and page-level calls to action
    Primary,
    /// Pink - form submission
    Accent,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    Medium,
    Large,
}

/// Reusable button component with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] class: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let padding = match size {
        ButtonSize::Medium => "px-6 py-3",
        ButtonSize::Large => "px-8 py-3 text-lg",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => {
            "rounded-full bg-purple-600 hover:bg-pink-600 text-white font-semibold transition-all duration-300 hover:scale-105"
        }
        ButtonVariant::Accent => {
            "rounded-lg bg-pink-600 hover:bg-purple-700 text-white font-semibold transition-colors duration-300 hover:scale-105"
        }
    };

    let computed_class = match &class {
        Some(extra) => format!("{padding} {variant_class} {extra}"),
        None => format!("{padding} {variant_class}"),
    };

    rsx! {
        ChromelessButton {
            disabled,
            r#type,
            class: Some(computed_class),
            onclick,
            {children}
        }
    }
}
