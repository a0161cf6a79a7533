//! Client-side tour search state shared by the navbar and the result views.

use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct TourSearchState {
    /// 1-based page of the tour listing.
    pub current_page: u32,
    pub last_search: Option<String>,
}

impl Default for TourSearchState {
    fn default() -> Self {
        Self {
            current_page: 1,
            last_search: None,
        }
    }
}

impl TourSearchState {
    /// Record a new search. Results always start from the first page.
    pub fn search_tours(&mut self, term: &str) {
        tracing::info!("Searching tours for {term:?}");
        self.last_search = Some(term.to_string());
        self.current_page = 1;
    }

    pub fn set_current_page(&mut self, page: u32) {
        tracing::debug!("Tour listing page set to {page}");
        self.current_page = page.max(1);
    }
}

pub fn use_tour_search() -> Signal<TourSearchState> {
    use_context::<Signal<TourSearchState>>()
}
