//! Section navigation and mobile-menu state.
//!
//! The page scrolls to sections by element id. The DOM side is abstracted
//! behind [`ScrollHost`] so the navigation rules can be exercised without a
//! browser.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::ListingError;

/// Page sections that can be scrolled to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    /// Hero banner
    Overview,
    /// Amenities grid
    Amenities,
    /// Image gallery
    Gallery,
    /// Neighborhood / map
    Location,
    /// Contact form
    Contact,
}

impl SectionId {
    /// Every section, in page order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Overview,
        SectionId::Amenities,
        SectionId::Gallery,
        SectionId::Location,
        SectionId::Contact,
    ];

    /// Element id of the section.
    pub const fn as_str(self) -> &'static str {
        match self {
            SectionId::Overview => "overview",
            SectionId::Amenities => "amenities",
            SectionId::Gallery => "gallery",
            SectionId::Location => "location",
            SectionId::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ListingError::UnknownSection(s.to_string()))
    }
}

/// A navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Target section
    pub id: SectionId,
    /// Button label
    pub label: &'static str,
}

const fn item(id: SectionId, label: &'static str) -> NavItem {
    NavItem { id, label }
}

/// Desktop nav bar. Contact is reached through [`CTA_LABEL`] instead.
pub const DESKTOP_NAV: [NavItem; 4] = [
    item(SectionId::Overview, "建案概述"),
    item(SectionId::Amenities, "頂級設施"),
    item(SectionId::Gallery, "精選藝廊"),
    item(SectionId::Location, "地理位置"),
];

/// Mobile overlay menu.
pub const MOBILE_NAV: [NavItem; 5] = [
    item(SectionId::Overview, "建案概述"),
    item(SectionId::Amenities, "頂級設施"),
    item(SectionId::Gallery, "精選藝廊"),
    item(SectionId::Location, "地理位置"),
    item(SectionId::Contact, "聯絡我們"),
];

/// Desktop call-to-action, jumps to [`SectionId::Contact`].
pub const CTA_LABEL: &str = "立即諮詢";

/// Open/closed state of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Flip open/closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Force closed.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Whether the overlay should be shown.
    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Something that can bring an element into view by id.
pub trait ScrollHost {
    /// Scroll the element with `id` into view.
    ///
    /// Returns `false` (and does nothing) when no such element exists.
    fn scroll_into_view(&self, id: &str) -> bool;
}

/// Result of a [`navigate`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    /// Target found and scrolled to
    Scrolled,
    /// No element with that id; nothing scrolled
    TargetMissing,
}

/// Scroll to the section `id` and close the mobile menu.
///
/// The menu is closed whether or not the target exists.
pub fn navigate<H>(host: &H, menu: &mut MenuState, id: &str) -> NavOutcome
where
    H: ScrollHost + ?Sized,
{
    let outcome = if host.scroll_into_view(id) {
        NavOutcome::Scrolled
    } else {
        NavOutcome::TargetMissing
    };
    menu.close();
    debug!("navigate #{id}: {outcome:?}");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records scroll requests against a fixed set of element ids.
    struct FakeDocument {
        ids: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl FakeDocument {
        fn with_sections() -> Self {
            Self {
                ids: SectionId::ALL.iter().map(|s| s.as_str()).collect(),
                scrolled: RefCell::new(Vec::new()),
            }
        }
    }

    impl ScrollHost for FakeDocument {
        fn scroll_into_view(&self, id: &str) -> bool {
            if self.ids.contains(&id) {
                self.scrolled.borrow_mut().push(id.to_string());
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn navigate_scrolls_and_closes_menu() {
        for section in SectionId::ALL {
            let doc = FakeDocument::with_sections();
            let mut menu = MenuState::default();
            menu.toggle();

            let outcome = navigate(&doc, &mut menu, section.as_str());

            assert_eq!(outcome, NavOutcome::Scrolled);
            assert_eq!(*doc.scrolled.borrow(), vec![section.as_str().to_string()]);
            assert!(!menu.is_open());
        }
    }

    #[test]
    fn navigate_to_missing_target_still_closes_menu() {
        let doc = FakeDocument::with_sections();
        let mut menu = MenuState::default();
        menu.toggle();

        let outcome = navigate(&doc, &mut menu, "penthouse");

        assert_eq!(outcome, NavOutcome::TargetMissing);
        assert!(doc.scrolled.borrow().is_empty());
        assert!(!menu.is_open());
    }

    #[test]
    fn navigate_with_closed_menu_keeps_it_closed() {
        let doc = FakeDocument::with_sections();
        let mut menu = MenuState::default();
        navigate(&doc, &mut menu, "gallery");
        assert!(!menu.is_open());
    }

    #[test]
    fn toggle_twice_is_identity() {
        for start_open in [false, true] {
            let mut menu = MenuState::default();
            if start_open {
                menu.toggle();
            }
            let before = menu;
            menu.toggle();
            assert_ne!(menu, before);
            menu.toggle();
            assert_eq!(menu, before);
        }
    }

    #[test]
    fn section_ids_parse_back() {
        for section in SectionId::ALL {
            assert_eq!(section.as_str().parse::<SectionId>(), Ok(section));
        }
        assert_eq!(
            "rooftop".parse::<SectionId>(),
            Err(ListingError::UnknownSection("rooftop".into()))
        );
    }

    #[test]
    fn mobile_nav_extends_desktop_nav_with_contact() {
        assert_eq!(&MOBILE_NAV[..DESKTOP_NAV.len()], &DESKTOP_NAV[..]);
        assert_eq!(MOBILE_NAV.last().map(|i| i.id), Some(SectionId::Contact));
    }
}
