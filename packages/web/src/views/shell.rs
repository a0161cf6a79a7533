use dioxus::prelude::*;

use ui::{use_session, Navbar, Session};

use crate::tours::use_tour_search;
use crate::Route;

/// Layout wrapping every page in the navigation bar.
#[component]
pub fn Shell() -> Element {
    let mut session = use_session();
    let mut tours = use_tour_search();
    let nav = use_navigator();

    rsx! {
        Navbar {
            on_search: move |term: String| tours.write().search_tours(&term),
            on_logout: move |_| {
                tracing::info!("Logging out");
                session.set(Session::Anonymous);
                nav.push(Route::Login {});
            },
            on_home: move |_| tours.write().set_current_page(1),
        }

        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}
