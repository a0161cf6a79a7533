//! Local navigation bar state and the collaborators it dispatches to.

use crate::config::SearchConfig;
use crate::popover::{should_dismiss, PointerHit};
use crate::search::{search_route, validate_term, SearchError};

/// External collaborators the navigation bar hands work off to.
///
/// Every call is fire-and-forget; the bar never observes a result.
pub trait NavbarActions {
    /// Start a tour search for `term`.
    fn search_tours(&self, term: &str);
    /// Move to `path` within the app.
    fn navigate(&self, path: &str);
    /// End the current session.
    fn logout(&self);
    /// Reset tour pagination back to the first page.
    fn reset_page(&self);
    /// Show a transient, non-blocking notice.
    fn notify(&self, message: &str);
}

/// The two transient regions the bar can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    AvatarMenu,
    MobileMenu,
}

/// Which copy of the controls an interaction came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSurface {
    Desktop,
    Mobile,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavbarState {
    pub menu_open: bool,
    pub avatar_menu_open: bool,
    pub search_term: String,
}

impl NavbarState {
    pub fn is_open(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::AvatarMenu => self.avatar_menu_open,
            Overlay::MobileMenu => self.menu_open,
        }
    }

    fn flag_mut(&mut self, overlay: Overlay) -> &mut bool {
        match overlay {
            Overlay::AvatarMenu => &mut self.avatar_menu_open,
            Overlay::MobileMenu => &mut self.menu_open,
        }
    }

    pub fn toggle(&mut self, overlay: Overlay) {
        let flag = self.flag_mut(overlay);
        *flag = !*flag;
    }

    /// Close `overlay`. Returns whether it was open.
    pub fn close(&mut self, overlay: Overlay) -> bool {
        std::mem::replace(self.flag_mut(overlay), false)
    }

    /// Close `overlay` if `hit` landed outside it. Returns whether anything changed.
    pub fn dismiss(&mut self, overlay: Overlay, hit: PointerHit) -> bool {
        should_dismiss(hit) && self.close(overlay)
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Submit the search form.
    ///
    /// An empty term shows the configured notice and dispatches nothing. Otherwise
    /// the search is dispatched, the results route is opened and the field is cleared.
    pub fn submit_search(
        &mut self,
        config: &SearchConfig,
        actions: &impl NavbarActions,
    ) -> Result<(), SearchError> {
        let term = match validate_term(&self.search_term) {
            Ok(term) => term,
            Err(e) => {
                tracing::info!("Search rejected: {e}");
                actions.notify(&config.empty_term_notice);
                return Err(e);
            }
        };
        tracing::debug!("Searching tours for {term:?}");
        actions.search_tours(&term);
        actions.navigate(&search_route(config, &term));
        self.search_term.clear();
        Ok(())
    }

    /// Log out from either the desktop dropdown or the mobile panel.
    pub fn logout(&mut self, surface: MenuSurface, actions: &impl NavbarActions) {
        tracing::debug!("Logout requested from {surface:?} menu");
        self.avatar_menu_open = false;
        self.menu_open = false;
        actions.logout();
    }

    pub fn go_home(&self, actions: &impl NavbarActions) {
        actions.reset_page();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, PartialEq)]
    enum Dispatch {
        Search(String),
        Navigate(String),
        Logout,
        ResetPage,
        Notify(String),
    }

    #[derive(Default)]
    struct Recorder {
        dispatched: RefCell<Vec<Dispatch>>,
    }

    impl NavbarActions for Recorder {
        fn search_tours(&self, term: &str) {
            self.dispatched.borrow_mut().push(Dispatch::Search(term.to_string()));
        }
        fn navigate(&self, path: &str) {
            self.dispatched.borrow_mut().push(Dispatch::Navigate(path.to_string()));
        }
        fn logout(&self) {
            self.dispatched.borrow_mut().push(Dispatch::Logout);
        }
        fn reset_page(&self) {
            self.dispatched.borrow_mut().push(Dispatch::ResetPage);
        }
        fn notify(&self, message: &str) {
            self.dispatched.borrow_mut().push(Dispatch::Notify(message.to_string()));
        }
    }

    #[test]
    fn test_initial_state() {
        let state = NavbarState::default();
        assert!(!state.menu_open);
        assert!(!state.avatar_menu_open);
        assert_eq!(state.search_term, "");
    }

    #[test]
    fn test_empty_search_only_notifies() {
        let recorder = Recorder::default();
        let mut state = NavbarState::default();

        let result = state.submit_search(&SearchConfig::default(), &recorder);

        assert_eq!(result, Err(SearchError::EmptyTerm));
        assert_eq!(
            *recorder.dispatched.borrow(),
            vec![Dispatch::Notify("Please enter a search term".to_string())]
        );
    }

    #[test]
    fn test_whitespace_search_is_dispatched() {
        let recorder = Recorder::default();
        let mut state = NavbarState::default();
        state.set_search_term("   ");

        assert!(state.submit_search(&SearchConfig::default(), &recorder).is_ok());
        assert_eq!(
            *recorder.dispatched.borrow(),
            vec![
                Dispatch::Search("   ".to_string()),
                Dispatch::Navigate("/tour/search?searchQuery=%20%20%20".to_string()),
            ]
        );
        assert_eq!(state.search_term, "");
    }

    #[test]
    fn test_search_term_is_dispatched_untrimmed() {
        let recorder = Recorder::default();
        let mut state = NavbarState::default();
        state.set_search_term(" paris ");

        state.submit_search(&SearchConfig::default(), &recorder).unwrap();

        assert_eq!(
            *recorder.dispatched.borrow(),
            vec![
                Dispatch::Search(" paris ".to_string()),
                Dispatch::Navigate("/tour/search?searchQuery=%20paris%20".to_string()),
            ]
        );
    }

    #[test]
    fn test_search_dispatches_navigates_and_clears() {
        let recorder = Recorder::default();
        let mut state = NavbarState::default();
        state.set_search_term("paris");

        state.submit_search(&SearchConfig::default(), &recorder).unwrap();

        let dispatched = recorder.dispatched.borrow();
        assert_eq!(dispatched[0], Dispatch::Search("paris".to_string()));
        match &dispatched[1] {
            Dispatch::Navigate(path) => assert!(path.contains("searchQuery=paris")),
            other => panic!("expected navigation, got {other:?}"),
        }
        assert_eq!(dispatched.len(), 2);
        assert_eq!(state.search_term, "");
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut state = NavbarState::default();
        state.toggle(Overlay::AvatarMenu);
        assert!(state.avatar_menu_open);
        assert!(!state.menu_open);

        state.toggle(Overlay::MobileMenu);
        assert!(state.menu_open);
        assert!(state.avatar_menu_open);

        state.toggle(Overlay::AvatarMenu);
        assert!(!state.avatar_menu_open);
        assert!(state.menu_open);
    }

    #[test]
    fn test_outside_pointer_down_closes_avatar_menu() {
        let mut state = NavbarState::default();
        state.toggle(Overlay::AvatarMenu);

        assert!(!state.dismiss(Overlay::AvatarMenu, PointerHit::TOGGLE));
        assert!(!state.dismiss(Overlay::AvatarMenu, PointerHit::PANEL));
        assert!(state.avatar_menu_open);

        assert!(state.dismiss(Overlay::AvatarMenu, PointerHit::OUTSIDE));
        assert!(!state.avatar_menu_open);
    }

    #[test]
    fn test_outside_pointer_down_closes_mobile_menu() {
        let mut state = NavbarState::default();
        state.toggle(Overlay::MobileMenu);
        state.toggle(Overlay::AvatarMenu);

        assert!(!state.dismiss(Overlay::MobileMenu, PointerHit::PANEL));
        assert!(state.dismiss(Overlay::MobileMenu, PointerHit::OUTSIDE));
        assert!(!state.menu_open);
        assert!(state.avatar_menu_open);
    }

    #[test]
    fn test_dismiss_closed_overlay_is_noop() {
        let mut state = NavbarState::default();
        assert!(!state.dismiss(Overlay::MobileMenu, PointerHit::OUTSIDE));
        assert_eq!(state, NavbarState::default());
    }

    #[test]
    fn test_logout_dispatches_once_from_either_surface() {
        for surface in [MenuSurface::Desktop, MenuSurface::Mobile] {
            let recorder = Recorder::default();
            let mut state = NavbarState {
                menu_open: true,
                avatar_menu_open: true,
                search_term: String::new(),
            };

            state.logout(surface, &recorder);

            assert_eq!(*recorder.dispatched.borrow(), vec![Dispatch::Logout]);
            assert!(!state.menu_open);
            assert!(!state.avatar_menu_open);
        }
    }

    #[test]
    fn test_home_resets_page() {
        let recorder = Recorder::default();
        NavbarState::default().go_home(&recorder);
        assert_eq!(*recorder.dispatched.borrow(), vec![Dispatch::ResetPage]);
    }
}
