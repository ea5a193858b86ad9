use dioxus::prelude::*;

/// Centered page column with consistent padding
#[component]
pub fn PageContainer(children: Element) -> Element {
    rsx! {
        div { class: "container mx-auto px-4 py-6", {children} }
    }
}
