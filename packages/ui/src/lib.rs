//! This crate contains the shared navigation UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod config;
pub use config::{use_navbar_config, ConfigError, NavbarConfig};

mod navbar;
pub use navbar::Navbar;

pub mod nav_links;
pub use nav_links::{nav_links, NavLink, NavLinkKind};

pub mod popover;
pub use popover::{use_outside_click, DismissRegions, PointerHit};

pub mod search;
pub use search::{search_route, validate_term, SearchError, SearchQuery};

mod session;
pub use session::{use_session, Session, SessionProvider, SessionUser};

pub mod state;
pub use state::{MenuSurface, NavbarActions, NavbarState, Overlay};

// Re-export the toast primitives the navbar posts notices to.
pub use dioxus_primitives::toast::{use_toast, ToastOptions, ToastProvider};
