use dioxus::prelude::*;

#[component]
pub fn AboutSection() -> Element {
    rsx! {
        section { class: "my-16 bg-gray-900 p-8 rounded-lg shadow-xl border border-gray-700",
            h2 { class: "text-3xl font-bold text-center text-pink-500 mb-6", "Sobre Kodigo Music" }
            p { class: "text-lg text-gray-300 text-center max-w-2xl mx-auto leading-relaxed",
                "En Kodigo Music, nos dedicamos a descubrir y promover el talento musical emergente y establecido. Creemos en el poder de la música para conectar almas y transformar experiencias. Únete a nuestra comunidad y sé parte del futuro de la música."
            }
        }
    }
}
