//! Landing hero

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

pub const HERO_IMAGE_URL: &str =
    "https://res.cloudinary.com/ddl6vwk0i/image/upload/v1752688449/hero-bg_qoibk2.jpg";

#[component]
pub fn HeroSection(on_discover: EventHandler<()>) -> Element {
    rsx! {
        section { class: "relative h-96 md:h-[500px] lg:h-[600px] w-full flex items-center justify-center text-center mb-16 rounded-xl overflow-hidden shadow-2xl",
            img {
                src: HERO_IMAGE_URL,
                alt: "Concierto de música en vivo",
                class: "absolute inset-0 w-full h-full object-cover brightness-50",
            }
            div { class: "relative z-10 p-4",
                h1 { class: "text-4xl md:text-6xl font-extrabold text-white leading-tight mb-4",
                    "Tu Sinfonía Comienza Aquí"
                }
                p { class: "text-lg md:text-xl text-gray-200 mb-8",
                    "Explora un mundo de sonidos y descubre tu próxima obsesión musical."
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Large,
                    onclick: move |_| on_discover.call(()),
                    "Descubre Más"
                }
            }
        }
    }
}
