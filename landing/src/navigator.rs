use horizon_listing::nav::{self, MenuState, NavOutcome, SectionId};
use leptos::prelude::*;

use crate::dom::DocumentScroller;

/// Page-wide navigation handle: owns the mobile-menu flag and scrolls to
/// sections. Cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct Navigator {
    menu: RwSignal<MenuState>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            menu: RwSignal::new(MenuState::default()),
        }
    }

    /// Scroll to `section` and close the mobile menu.
    pub fn go(self, section: SectionId) -> NavOutcome {
        let mut outcome = NavOutcome::TargetMissing;
        self.menu.update(|menu| {
            outcome = nav::navigate(&DocumentScroller, menu, section.as_str());
        });
        outcome
    }

    pub fn toggle_menu(self) {
        self.menu.update(MenuState::toggle);
    }

    pub fn menu_open(self) -> bool {
        self.menu.with(MenuState::is_open)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
