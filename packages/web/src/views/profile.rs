use dioxus::prelude::*;
use ui::use_session;

#[component]
pub fn Profile(id: String) -> Element {
    let session = use_session();
    let session = session();
    let own = session.user().filter(|u| u.id == id);

    rsx! {
        h1 { "Profile" }
        if let Some(user) = own {
            p { b { "{user.display_name()}" } }
            p { class: "page-muted", "{user.email}" }
        } else {
            p { class: "page-muted", "Traveler {id}" }
        }
    }
}
