//! Contact form view
//!
//! Pure view: the page owns the draft message and the validation errors and
//! passes them down. Every keystroke hands back an updated copy of the draft.

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::text_input::{TextArea, TextInput};
use dioxus::prelude::*;
use kodigo_common::contact::{ContactErrors, ContactMessage};

#[component]
pub fn ContactFormView(
    values: ContactMessage,
    errors: ContactErrors,
    on_change: EventHandler<ContactMessage>,
    on_submit: EventHandler<()>,
) -> Element {
    let on_name = {
        let values = values.clone();
        move |name: String| on_change.call(ContactMessage { name, ..values.clone() })
    };
    let on_email = {
        let values = values.clone();
        move |email: String| on_change.call(ContactMessage { email, ..values.clone() })
    };
    let on_subject = {
        let values = values.clone();
        move |subject: String| on_change.call(ContactMessage { subject, ..values.clone() })
    };
    let on_message = {
        let values = values.clone();
        move |message: String| on_change.call(ContactMessage { message, ..values.clone() })
    };

    rsx! {
        div { class: "min-h-screen flex flex-col items-center py-12 px-4 sm:px-6 lg:px-8",
            div { class: "max-w-md w-full bg-gray-900 p-8 rounded-lg shadow-xl border border-gray-700",
                h2 { class: "text-4xl font-extrabold text-center text-purple-400 mb-6", "Contáctanos 📩" }
                p { class: "text-center mb-8 text-lg text-purple-400",
                    "Envíanos un mensaje y te responderemos lo antes posible."
                }
                form {
                    class: "space-y-6",
                    novalidate: true,
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        on_submit.call(());
                    },
                    FormField { label: "Nombre Completo:", for_id: "name", error: errors.name.clone(),
                        TextInput {
                            id: "name",
                            value: values.name.clone(),
                            on_input: on_name,
                            placeholder: "Tu nombre",
                            invalid: errors.name.is_some(),
                        }
                    }
                    FormField { label: "Correo Electrónico:", for_id: "email", error: errors.email.clone(),
                        TextInput {
                            id: "email",
                            input_type: "email",
                            value: values.email.clone(),
                            on_input: on_email,
                            placeholder: "tu@ejemplo.com",
                            invalid: errors.email.is_some(),
                        }
                    }
                    FormField { label: "Asunto:", for_id: "subject", error: errors.subject.clone(),
                        TextInput {
                            id: "subject",
                            value: values.subject.clone(),
                            on_input: on_subject,
                            placeholder: "Sobre qué quieres hablar",
                            invalid: errors.subject.is_some(),
                        }
                    }
                    FormField { label: "Mensaje:", for_id: "message", error: errors.message.clone(),
                        TextArea {
                            id: "message",
                            value: values.message.clone(),
                            on_input: on_message,
                            placeholder: "Escribe tu mensaje aquí...",
                            invalid: errors.message.is_some(),
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Medium,
                        r#type: "submit",
                        class: "w-full".to_string(),
                        onclick: |_| {},
                        "Enviar Mensaje"
                    }
                }
            }
        }
    }
}

/// Label, control and inline error for one field
#[component]
fn FormField(
    label: &'static str,
    for_id: &'static str,
    error: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div {
            label { r#for: for_id, class: "block text-sm font-medium text-gray-300 mb-1", "{label}" }
            {children}
            if let Some(message) = error {
                p { class: "mt-2 text-sm text-red-500", "{message}" }
            }
        }
    }
}
