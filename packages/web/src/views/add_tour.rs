use dioxus::prelude::*;

#[component]
pub fn AddTour() -> Element {
    rsx! {
        h1 { "Add Tour" }
        p { class: "page-muted", "Share a tour you have taken." }
    }
}
