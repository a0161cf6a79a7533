//! Outside-click dismissal for dropdowns and panels.
//!
//! A popover is a toggle control plus the panel it opens. Both are located by
//! element id. A pointer-down anywhere in the document that lands outside both
//! regions dismisses the popover; a pointer-down inside either leaves it alone,
//! so the toggle keeps its own open/close behaviour.
//!
//! [`use_outside_click`] owns one document-level `mousedown` listener for the
//! lifetime of the calling component. It is registered on first render and
//! removed when the component's hooks are dropped on unmount.

use dioxus::prelude::*;

/// Element ids of a popover's toggle control and its panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DismissRegions {
    pub toggle_id: String,
    pub panel_id: String,
}

impl DismissRegions {
    pub fn new(toggle_id: impl Into<String>, panel_id: impl Into<String>) -> Self {
        Self {
            toggle_id: toggle_id.into(),
            panel_id: panel_id.into(),
        }
    }

    /// Locate a pointer-down, given whether the region with a given id contains it.
    pub fn hit(&self, contains: impl Fn(&str) -> bool) -> PointerHit {
        PointerHit {
            in_toggle: contains(&self.toggle_id),
            in_panel: contains(&self.panel_id),
        }
    }
}

/// Where a pointer-down landed relative to a popover's regions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerHit {
    pub in_toggle: bool,
    pub in_panel: bool,
}

impl PointerHit {
    pub const OUTSIDE: PointerHit = PointerHit {
        in_toggle: false,
        in_panel: false,
    };
    pub const TOGGLE: PointerHit = PointerHit {
        in_toggle: true,
        in_panel: false,
    };
    pub const PANEL: PointerHit = PointerHit {
        in_toggle: false,
        in_panel: true,
    };
}

pub fn should_dismiss(hit: PointerHit) -> bool {
    !hit.in_toggle && !hit.in_panel
}

/// Call `on_outside` for every document pointer-down outside `regions`.
///
/// The callback runs from a raw DOM listener, outside any component scope, so it
/// must only touch signals (not `EventHandler`s).
pub fn use_outside_click(regions: DismissRegions, on_outside: impl FnMut() + 'static) {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        use_hook(move || {
            std::rc::Rc::new(listener::OutsideClickListener::install(regions, on_outside))
        });
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let _ = (regions, on_outside);
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod listener {
    use gloo_events::EventListener;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Event, Node};

    use super::{should_dismiss, DismissRegions, PointerHit};

    pub(super) struct OutsideClickListener {
        panel_id: String,
        _listener: EventListener,
    }

    impl OutsideClickListener {
        pub(super) fn install(
            regions: DismissRegions,
            mut on_outside: impl FnMut() + 'static,
        ) -> Option<Self> {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                tracing::warn!("No document; outside-click dismissal disabled");
                return None;
            };
            let panel_id = regions.panel_id.clone();
            let lookup = document.clone();
            let listener = EventListener::new(&document, "mousedown", move |event| {
                if should_dismiss(hit_test(&lookup, &regions, event)) {
                    on_outside();
                }
            });
            tracing::debug!("Installed outside-click listener for #{panel_id}");
            Some(Self {
                panel_id,
                _listener: listener,
            })
        }
    }

    impl Drop for OutsideClickListener {
        fn drop(&mut self) {
            tracing::debug!("Removed outside-click listener for #{}", self.panel_id);
        }
    }

    fn hit_test(document: &Document, regions: &DismissRegions, event: &Event) -> PointerHit {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        regions.hit(|id| {
            document
                .get_element_by_id(id)
                .map(|el| el.contains(target.as_ref()))
                .unwrap_or(false)
        })
    }

}
