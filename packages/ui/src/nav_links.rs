//! The session-dependent link set of the navigation bar.

use crate::config::RoutesConfig;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLinkKind {
    Home,
    Login,
    Signup,
    AddTour,
    Profile,
    Dashboard,
    /// The avatar dropdown toggle. Has no route of its own.
    Avatar,
}

impl NavLinkKind {
    pub fn label(self) -> &'static str {
        match self {
            NavLinkKind::Home => "Home",
            NavLinkKind::Login => "Login",
            NavLinkKind::Signup => "Signup",
            NavLinkKind::AddTour => "Add Tour",
            NavLinkKind::Profile => "Profile",
            NavLinkKind::Dashboard => "Dashboard",
            NavLinkKind::Avatar => "Avatar",
        }
    }

    /// Login and signup stand out from the regular links.
    pub fn class(self) -> &'static str {
        match self {
            NavLinkKind::Login | NavLinkKind::Signup => "navLinks clr-blue",
            _ => "navLinks clr-black",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub kind: NavLinkKind,
    pub to: Option<String>,
}

impl NavLink {
    fn route(kind: NavLinkKind, to: &str) -> Self {
        Self {
            kind,
            to: Some(to.to_string()),
        }
    }
}

/// Links shown for `session`, in display order.
pub fn nav_links(session: &Session, routes: &RoutesConfig) -> Vec<NavLink> {
    let mut links = vec![NavLink::route(NavLinkKind::Home, &routes.home)];
    match session {
        Session::Anonymous => {
            links.push(NavLink::route(NavLinkKind::Login, &routes.login));
            links.push(NavLink::route(NavLinkKind::Signup, &routes.signup));
        }
        Session::Authenticated(user) => {
            links.push(NavLink::route(NavLinkKind::AddTour, &routes.add_tour));
            links.push(NavLink::route(NavLinkKind::Profile, &routes.profile(&user.id)));
            links.push(NavLink::route(NavLinkKind::Dashboard, &routes.dashboard));
            links.push(NavLink {
                kind: NavLinkKind::Avatar,
                to: None,
            });
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionUser;

    fn labels(links: &[NavLink]) -> Vec<&'static str> {
        links.iter().map(|l| l.kind.label()).collect()
    }

    #[test]
    fn test_anonymous_links() {
        let links = nav_links(&Session::Anonymous, &RoutesConfig::default());
        assert_eq!(labels(&links), vec!["Home", "Login", "Signup"]);
        assert_eq!(links[1].to.as_deref(), Some("/login"));
        assert_eq!(links[2].kind.class(), "navLinks clr-blue");
    }

    #[test]
    fn test_authenticated_links() {
        let session = Session::Authenticated(SessionUser {
            id: "u-7".to_string(),
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            profile_image_url: Some("https://img.example.com/g.png".to_string()),
        });
        let links = nav_links(&session, &RoutesConfig::default());
        assert_eq!(
            labels(&links),
            vec!["Home", "Add Tour", "Profile", "Dashboard", "Avatar"]
        );
        assert_eq!(links[2].to.as_deref(), Some("/user/u-7"));
        assert_eq!(links[4].to, None);
        assert!(links.iter().all(|l| l.kind.class() == "navLinks clr-black"));
    }
}
