use crate::Route;
use dioxus::prelude::*;
use kodigo_common::contact::ContactMessage;
use kodigo_ui::ContactSuccessView;

#[component]
pub fn ContactSuccess(message: ContactMessage) -> Element {
    rsx! {
        document::Title { "Mensaje Enviado - Kodigo Music" }
        document::Meta {
            name: "description",
            content: "Confirmación del envío de tu mensaje a Kodigo Music.",
        }
        ContactSuccessView {
            message,
            on_home: move |_| {
                navigator().push(Route::Home {});
            },
        }
    }
}
