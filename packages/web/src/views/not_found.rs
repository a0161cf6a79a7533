use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        h1 { "Page not found" }
        p { class: "page-muted", "Nothing lives at /{path}." }
    }
}
