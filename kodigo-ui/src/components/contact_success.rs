//! Contact confirmation view

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;
use kodigo_common::contact::ContactMessage;

/// Thanks the sender and echoes back whatever fields arrived
#[component]
pub fn ContactSuccessView(message: ContactMessage, on_home: EventHandler<()>) -> Element {
    let fields = message
        .filled_fields()
        .into_iter()
        .map(|(label, value)| (label, value.to_string()))
        .collect::<Vec<_>>();

    rsx! {
        div { class: "min-h-screen flex flex-col items-center py-12 px-4 sm:px-6 lg:px-8",
            div { class: "max-w-md w-full bg-gray-900 p-8 rounded-lg shadow-xl border border-gray-700 text-center",
                h2 { class: "text-4xl font-extrabold text-center text-purple-400 mb-6",
                    "¡Mensaje Enviado con Éxito! 🎉"
                }
                p { class: "text-lg text-purple-400 mb-8",
                    "Gracias por contactarnos. Hemos recibido tu mensaje y te responderemos a la brevedad posible."
                }
                div { class: "text-left bg-gray-800 p-6 rounded-md shadow-inner mb-8",
                    h3 { class: "text-xl font-semibold text-pink-500 mb-4", "Detalles de tu mensaje:" }
                    for (label, value) in fields {
                        p { key: "{label}", class: "mb-2 text-white break-words",
                            strong { class: "text-gray-400", "{label}:" }
                            " {value}"
                        }
                    }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    onclick: move |_| on_home.call(()),
                    "Volver a Inicio"
                }
            }
        }
    }
}
