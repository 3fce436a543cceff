//! Thin helpers over the host document.

use horizon_listing::nav::ScrollHost;
use thiserror::Error;
use tracing::warn;
use wasm_bindgen::JsValue;
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, Window};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global `window`")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// `location.search` of the current page, including the leading `?`.
pub fn query_string() -> Result<String, DomError> {
    Ok(window()?.location().search()?)
}

/// Scrolls page sections into view with smooth behavior.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentScroller;

impl DocumentScroller {
    fn try_scroll(&self, id: &str) -> Result<bool, DomError> {
        let Some(element) = document()?.get_element_by_id(id) else {
            return Ok(false);
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(true)
    }
}

impl ScrollHost for DocumentScroller {
    fn scroll_into_view(&self, id: &str) -> bool {
        match self.try_scroll(id) {
            Ok(true) => true,
            Ok(false) => {
                warn!("no element with id {id:?}, not scrolling");
                false
            }
            Err(err) => {
                warn!("scroll to #{id} failed: {err}");
                false
            }
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use horizon_listing::nav::{self, MenuState, NavOutcome};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_section(id: &str) -> web_sys::Element {
        let document = document().expect("document");
        let section = document.create_element("section").expect("create section");
        section.set_id(id);
        document
            .body()
            .expect("body")
            .append_child(&section)
            .expect("append section");
        section
    }

    #[wasm_bindgen_test]
    fn scrolls_to_existing_section() {
        let section = mount_section("amenities");
        assert!(DocumentScroller.scroll_into_view("amenities"));
        section.remove();
    }

    #[wasm_bindgen_test]
    fn missing_section_is_a_no_op() {
        assert!(!DocumentScroller.scroll_into_view("does-not-exist"));
    }

    #[wasm_bindgen_test]
    fn navigate_closes_menu_against_real_document() {
        let section = mount_section("gallery");
        let mut menu = MenuState::default();

        menu.toggle();
        assert_eq!(
            nav::navigate(&DocumentScroller, &mut menu, "gallery"),
            NavOutcome::Scrolled
        );
        assert!(!menu.is_open());

        menu.toggle();
        assert_eq!(
            nav::navigate(&DocumentScroller, &mut menu, "penthouse"),
            NavOutcome::TargetMissing
        );
        assert!(!menu.is_open());

        section.remove();
    }

    #[wasm_bindgen_test]
    fn js_errors_convert_to_dom_error() {
        let err = DomError::from(JsValue::from_str("boom"));
        assert_eq!(err.to_string(), "javascript error: boom");
    }
}
