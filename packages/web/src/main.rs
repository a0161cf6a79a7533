use dioxus::prelude::*;

use ui::{NavbarConfig, SearchQuery, SessionProvider, ToastProvider};
use views::{AddTour, Dashboard, Home, Login, NotFound, Profile, Shell, Signup, TourSearch};

mod tours;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
        #[route("/addTour")]
        AddTour {},
        #[route("/user/:id")]
        Profile { id: String },
        #[route("/dashboard")]
        Dashboard {},
        #[route("/tour/search?:..query")]
        TourSearch { query: SearchQuery },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Navbar settings baked into the bundle.
const NAVBAR_TOML: &str = include_str!("../navbar.toml");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| NavbarConfig::from_toml_or_default(NAVBAR_TOML));
    use_context_provider(|| Signal::new(tours::TourSearchState::default()));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
