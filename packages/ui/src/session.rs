//! Session context and hooks for the UI.

use dioxus::prelude::*;

/// The authenticated identity shown in the navigation bar.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub profile_image_url: Option<String>,
}

impl SessionUser {
    /// Get display name, falling back to email if name is blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// Who is using the app right now.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(SessionUser),
}

impl Session {
    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated(user) => Some(user),
        }
    }
}

/// Get the current session.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Provider component that owns the session signal.
/// Wrap your app with this component before rendering the [`crate::Navbar`].
#[component]
pub fn SessionProvider(
    #[props(default)] initial: Session,
    children: Element,
) -> Element {
    use_context_provider(|| Signal::new(initial.clone()));

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traveler() -> SessionUser {
        SessionUser {
            id: "64b1f0".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            profile_image_url: None,
        }
    }

    #[test]
    fn test_session_user() {
        assert_eq!(Session::default().user(), None);
        let session = Session::Authenticated(traveler());
        assert_eq!(session.user().map(|u| u.id.as_str()), Some("64b1f0"));
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut user = traveler();
        assert_eq!(user.display_name(), "Ada");
        user.name = "  ".to_string();
        assert_eq!(user.display_name(), "ada@example.com");
    }
}
