use dioxus::prelude::*;
use dioxus_primitives::toast::{use_toast, ToastOptions};

use crate::config::use_navbar_config;
use crate::icons::{FaBars, FaMagnifyingGlass};
use crate::nav_links::{nav_links, NavLink, NavLinkKind};
use crate::popover::{use_outside_click, DismissRegions};
use crate::session::{use_session, SessionUser};
use crate::state::{MenuSurface, NavbarActions, NavbarState, Overlay};
use crate::Icon;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

const AVATAR_TOGGLE_ID: &str = "navbar-avatar-toggle";
const AVATAR_MENU_ID: &str = "navbar-avatar-menu";
const HAMBURGER_ID: &str = "navbar-hamburger";
const MOBILE_PANEL_ID: &str = "navbar-mobile-panel";

/// Routes navbar dispatches to the host app and the shared toast stack.
#[derive(Clone, Copy)]
struct NavbarDispatch {
    on_search: EventHandler<String>,
    on_logout: EventHandler<()>,
    on_home: EventHandler<()>,
    notify: Callback<String>,
}

impl NavbarActions for NavbarDispatch {
    fn search_tours(&self, term: &str) {
        self.on_search.call(term.to_string());
    }

    fn navigate(&self, path: &str) {
        tracing::debug!("Navigating to {path}");
        if let Some(failure) = navigator().push(path.to_string()) {
            tracing::warn!("Navigation to {path} failed: {failure:?}");
        }
    }

    fn logout(&self) {
        self.on_logout.call(());
    }

    fn reset_page(&self) {
        self.on_home.call(());
    }

    fn notify(&self, message: &str) {
        self.notify.call(message.to_string());
    }
}

/// Responsive navigation bar.
///
/// Reads the session from [`crate::SessionProvider`] and the links from
/// [`crate::NavbarConfig`] context. Searches, logouts and Home clicks are handed to
/// the host through the event handlers; navigation to the results page goes
/// through the router. Must be rendered inside a `Router` and a `ToastProvider`.
#[component]
pub fn Navbar(
    /// Called with the term when a non-empty search is submitted.
    on_search: EventHandler<String>,
    /// Called when the user logs out from either menu.
    on_logout: EventHandler<()>,
    /// Called when the Home link is clicked, to reset pagination.
    #[props(default)]
    on_home: EventHandler<()>,
) -> Element {
    let config = use_navbar_config();
    let session = use_session();
    let mut state = use_signal(NavbarState::default);

    let toasts = use_toast();
    let notify = use_callback(move |message: String| {
        toasts.info(message, ToastOptions::new());
    });
    let dispatch = NavbarDispatch {
        on_search,
        on_logout,
        on_home,
        notify,
    };

    use_outside_click(
        DismissRegions::new(AVATAR_TOGGLE_ID, AVATAR_MENU_ID),
        move || {
            if state.peek().is_open(Overlay::AvatarMenu) {
                state.write().close(Overlay::AvatarMenu);
            }
        },
    );
    use_outside_click(
        DismissRegions::new(HAMBURGER_ID, MOBILE_PANEL_ID),
        move || {
            if state.peek().is_open(Overlay::MobileMenu) {
                state.write().close(Overlay::MobileMenu);
            }
        },
    );

    let search_config = config.search.clone();
    let submit_search = use_callback(move |()| {
        let mut next = state();
        if let Err(e) = next.submit_search(&search_config, &dispatch) {
            tracing::debug!("Search not submitted: {e}");
        }
        state.set(next);
    });
    let logout = use_callback(move |surface: MenuSurface| {
        let mut next = state();
        next.logout(surface, &dispatch);
        state.set(next);
    });
    let go_home = use_callback(move |()| state.peek().go_home(&dispatch));

    let session = session();
    let user = session.user().cloned();
    let links = nav_links(&session, &config.routes);
    let profile = user.as_ref().map(|u| config.routes.profile(&u.id));
    let menu_open = state().menu_open;
    let placeholder = config.search.placeholder.clone();

    rsx! {
        document::Stylesheet { href: NAVBAR_CSS }

        div {
            class: "navbar",

            // Desktop
            div {
                class: "navbar__desktop",

                Link {
                    to: config.routes.home.clone(),
                    class: "navbar__logo-text",
                    if let Some(ref logo) = config.brand.logo_url {
                        img { src: "{logo}", alt: "{config.brand.title} logo" }
                    } else {
                        "{config.brand.title}"
                    }
                }

                nav {
                    class: "navbar__desktop-links-and-avatar",

                    SearchForm {
                        state,
                        placeholder: placeholder.clone(),
                        on_submit: submit_search,
                    }

                    div {
                        class: "navbar__desktop-links",
                        for link in links.iter() {
                            if link.kind == NavLinkKind::Avatar {
                                if let (Some(user), Some(profile)) = (user.as_ref(), profile.as_ref()) {
                                    AvatarMenu {
                                        key: "{\"avatar\"}",
                                        user: user.clone(),
                                        profile: profile.clone(),
                                        state,
                                        on_logout: move |_| logout.call(MenuSurface::Desktop),
                                    }
                                }
                            } else {
                                NavAnchor {
                                    key: "{link.kind.label()}",
                                    link: link.clone(),
                                    on_home: go_home,
                                }
                            }
                        }
                    }
                }

                button {
                    id: HAMBURGER_ID,
                    r#type: "button",
                    aria_label: "Toggle mobile menu",
                    class: if menu_open { "navbar__hamburger-btn clr-blue" } else { "navbar__hamburger-btn clr-black" },
                    onclick: move |_| state.write().toggle(Overlay::MobileMenu),
                    span {
                        class: if menu_open { "svg-fill-salmon" } else { "" },
                        Icon { icon: FaBars, width: 24, height: 24 }
                    }
                }
            }

            // Mobile
            if menu_open {
                nav {
                    id: MOBILE_PANEL_ID,
                    class: "navbar__mobile",
                    div {
                        class: "navbar__mobile-navLinks",
                        for link in links.iter().filter(|l| l.kind != NavLinkKind::Avatar) {
                            NavAnchor {
                                key: "{link.kind.label()}",
                                link: link.clone(),
                                on_home: go_home,
                            }
                        }

                        SearchForm {
                            state,
                            placeholder,
                            on_submit: submit_search,
                        }

                        if let (Some(user), Some(profile)) = (user.as_ref(), profile.as_ref()) {
                            MobileAvatar {
                                user: user.clone(),
                                profile: profile.clone(),
                                on_logout: move |_| logout.call(MenuSurface::Mobile),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavAnchor(link: NavLink, on_home: EventHandler<()>) -> Element {
    let kind = link.kind;
    let to = link.to.unwrap_or_default();

    rsx! {
        Link {
            class: "{kind.class()}",
            to,
            onclick: move |_| {
                if kind == NavLinkKind::Home {
                    on_home.call(());
                }
            },
            "{kind.label()}"
        }
    }
}

/// Search form bound to the shared search term. Rendered once per surface.
#[component]
fn SearchForm(
    state: Signal<NavbarState>,
    placeholder: String,
    on_submit: EventHandler<()>,
) -> Element {
    let mut state = state;

    rsx! {
        form {
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },
            input {
                r#type: "text",
                class: "search-input",
                placeholder: "{placeholder}",
                value: "{state().search_term}",
                oninput: move |evt: FormEvent| state.write().set_search_term(evt.value()),
            }
            button {
                r#type: "submit",
                class: "search-btn",
                Icon { icon: FaMagnifyingGlass, width: 18, height: 18, fill: "dodgerblue" }
            }
        }
    }
}

#[component]
fn AvatarImage(user: SessionUser) -> Element {
    match user.profile_image_url {
        Some(ref src) => rsx! {
            img { src: "{src}", referrerpolicy: "no-referrer", alt: "" }
        },
        None => {
            let initial = user
                .display_name()
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_default();
            rsx! {
                span { class: "avatarInitial", "{initial}" }
            }
        }
    }
}

/// Desktop avatar toggle with its dropdown.
#[component]
fn AvatarMenu(
    user: SessionUser,
    profile: String,
    state: Signal<NavbarState>,
    on_logout: EventHandler<()>,
) -> Element {
    let mut state = state;
    let open = state().avatar_menu_open;

    rsx! {
        span {
            class: "navbar__userAvatar",
            div {
                id: AVATAR_TOGGLE_ID,
                class: "avatarPic",
                onclick: move |_| state.write().toggle(Overlay::AvatarMenu),
                AvatarImage { user: user.clone() }

                if open {
                    ul {
                        id: AVATAR_MENU_ID,
                        class: "avatarMenuDesktop",
                        li {
                            Link { to: profile.clone(), b { "{user.display_name()}" } }
                        }
                        li {
                            Link { to: profile.clone(), "{user.email}" }
                        }
                        li {
                            class: "avatarMenuDesktop-button",
                            button {
                                class: "navBtn",
                                onclick: move |evt: MouseEvent| {
                                    evt.stop_propagation();
                                    on_logout.call(());
                                },
                                "Logout"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MobileAvatar(user: SessionUser, profile: String, on_logout: EventHandler<()>) -> Element {
    rsx! {
        ul {
            class: "avatarMenuMobile",
            div {
                class: "avatarMenuMobile-image-and-text",
                li {
                    Link { to: profile.clone(), AvatarImage { user: user.clone() } }
                }
                div {
                    class: "avatarMenuMobile-text",
                    li {
                        Link { to: profile.clone(), b { "{user.display_name()}" } }
                    }
                    li {
                        Link { to: profile.clone(), "{user.email}" }
                    }
                }
            }
            li {
                class: "avatarMenuMobile-button",
                button {
                    class: "navBtn",
                    onclick: move |_| on_logout.call(()),
                    "Logout"
                }
            }
        }
    }
}
