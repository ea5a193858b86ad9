use crate::Route;
use dioxus::prelude::*;
use kodigo_common::contact::{ContactErrors, ContactMessage};
use kodigo_ui::ContactFormView;
use tracing::{debug, info};

#[component]
pub fn Contact() -> Element {
    let mut draft = use_signal(ContactMessage::default);
    let mut errors = use_signal(ContactErrors::default);
    // After a rejected submit, errors follow every edit
    let mut attempted = use_signal(|| false);

    rsx! {
        document::Title { "Contacto - Kodigo Music" }
        document::Meta {
            name: "description",
            content: "Ponte en contacto con Kodigo Music para consultas, colaboraciones o soporte.",
        }
        ContactFormView {
            values: draft(),
            errors: errors(),
            on_change: move |next: ContactMessage| {
                if attempted() {
                    errors.set(next.validate().err().unwrap_or_default());
                }
                draft.set(next);
            },
            on_submit: move |_| {
                let message = draft();
                match message.validate() {
                    Ok(()) => {
                        info!("Contact form accepted");
                        draft.set(ContactMessage::default());
                        errors.set(ContactErrors::default());
                        attempted.set(false);
                        navigator().push(Route::ContactSuccess { message });
                    }
                    Err(field_errors) => {
                        debug!("Contact form rejected: {:?}", field_errors);
                        attempted.set(true);
                        errors.set(field_errors);
                    }
                }
            },
        }
    }
}
