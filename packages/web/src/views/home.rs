use dioxus::prelude::*;

use crate::tours::use_tour_search;

#[component]
pub fn Home() -> Element {
    let tours = use_tour_search();
    let state = tours();

    rsx! {
        h1 { "Tours" }
        p {
            class: "page-muted",
            "Page {state.current_page}"
        }
        if let Some(ref term) = state.last_search {
            p {
                class: "page-muted",
                "Last search: {term}"
            }
        }
    }
}
