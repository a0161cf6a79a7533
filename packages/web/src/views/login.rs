//! Login and signup views.
//!
//! Accounts are not verified here: submitting either form signs the traveler in
//! locally through the shared session signal.

use dioxus::prelude::*;
use ui::{use_session, Session, SessionUser};

use crate::Route;

#[component]
pub fn Login() -> Element {
    rsx! {
        SignInForm { title: "Log in", submit_label: "Login" }
    }
}

#[component]
pub fn Signup() -> Element {
    rsx! {
        SignInForm { title: "Create an account", submit_label: "Signup" }
    }
}

#[component]
fn SignInForm(title: String, submit_label: String) -> Element {
    let mut session = use_session();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let nav = use_navigator();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let n = name().trim().to_string();
        let e = email().trim().to_string();

        if e.is_empty() || !e.contains('@') {
            error.set(Some("Please enter a valid email".to_string()));
            return;
        }

        let id = e.split('@').next().unwrap_or_default().to_string();
        tracing::info!("Signed in as {id}");
        session.set(Session::Authenticated(SessionUser {
            id,
            name: n,
            email: e,
            profile_image_url: None,
        }));
        nav.push(Route::Home {});
    };

    rsx! {
        h1 { "{title}" }

        form {
            class: "sign-in-form",
            onsubmit: handle_submit,

            input {
                r#type: "text",
                placeholder: "Name",
                value: name(),
                oninput: move |evt: FormEvent| name.set(evt.value()),
            }
            input {
                r#type: "email",
                placeholder: "Email",
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }

            if let Some(err) = error() {
                p { class: "form-error", "{err}" }
            }

            button { r#type: "submit", "{submit_label}" }
        }
    }
}
