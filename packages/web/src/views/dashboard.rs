use dioxus::prelude::*;
use ui::use_session;

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let session = session();

    rsx! {
        h1 { "Dashboard" }
        if let Some(user) = session.user() {
            p { class: "page-muted", "Tours created by {user.display_name()}." }
        } else {
            p { class: "page-muted", "Log in to see your tours." }
        }
    }
}
