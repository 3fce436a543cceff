//! One-shot scroll reveal.
//!
//! Every `.reveal` element is observed until it first intersects the
//! viewport, gets the `visible` class, and is then unobserved.

#![allow(clippy::collapsible_if)]

use horizon_listing::config::RevealConfig;
use horizon_listing::motion::{REVEAL_CLASS, VISIBLE_CLASS};
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::{self, DomError};

/// Start observing reveal targets; on failure show everything at once.
pub fn install(config: &RevealConfig) {
    match observe(config) {
        Ok(count) => debug!("observing {count} reveal targets"),
        Err(err) => {
            warn!("reveal observer unavailable ({err}), showing all sections");
            if let Err(err) = reveal_all() {
                warn!("could not reveal sections: {err}");
            }
        }
    }
}

fn observe(config: &RevealConfig) -> Result<u32, DomError> {
    let document = dom::document()?;

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Err(err) = target.class_list().add_1(VISIBLE_CLASS) {
                    warn!("reveal failed: {}", DomError::from(err));
                }
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    let targets = document.query_selector_all(&format!(".{REVEAL_CLASS}"))?;
    let mut observed = 0;
    for idx in 0..targets.length() {
        if let Some(node) = targets.item(idx) {
            if let Ok(element) = node.dyn_into::<Element>() {
                observer.observe(&element);
                observed += 1;
            }
        }
    }

    // Lives as long as the page
    callback.forget();
    Ok(observed)
}

fn reveal_all() -> Result<(), DomError> {
    let targets = dom::document()?.query_selector_all(&format!(".{REVEAL_CLASS}"))?;
    for idx in 0..targets.length() {
        if let Some(element) = targets.item(idx).and_then(|n| n.dyn_into::<Element>().ok()) {
            element.class_list().add_1(VISIBLE_CLASS)?;
        }
    }
    Ok(())
}
