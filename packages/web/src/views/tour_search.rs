use dioxus::prelude::*;
use ui::SearchQuery;

use crate::tours::use_tour_search;

/// Search results page, reached from the navbar search form.
#[component]
pub fn TourSearch(query: SearchQuery) -> Element {
    let tours = use_tour_search();
    let page = tours().current_page;

    rsx! {
        h1 { "Search results" }
        if query.term.is_empty() {
            p { class: "page-muted", "No search term." }
        } else {
            p { class: "page-muted", "Tours matching \"{query.term}\" (page {page})" }
        }
    }
}
