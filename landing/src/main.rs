// Azure Horizon landing page, Leptos 0.8 Edition

mod dom;
mod logging;
mod navigator;
mod reveal;
mod sections;
mod styles;

use std::time::Duration;

use horizon_listing::config::SiteConfig;
use horizon_listing::data;
use leptos::prelude::*;
use navigator::Navigator;
use sections::*;
use tracing::{debug, info, warn};

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_problems) = load_config();
    logging::init(&config.log_filter);
    for problem in config_problems {
        warn!("{problem}");
    }

    info!(
        "{} landing v{}",
        data::sample().name,
        env!("CARGO_PKG_VERSION")
    );
    debug!(
        "site config: {}",
        serde_json::to_string(&config).unwrap_or_default()
    );

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}

/// Defaults plus overrides from the page query string.
///
/// Logging isn't up yet, so rejected overrides are handed back to be
/// reported once it is.
fn load_config() -> (SiteConfig, Vec<String>) {
    let mut config = SiteConfig::default();
    let problems = match dom::query_string() {
        Ok(query) => config
            .apply_query(&query)
            .into_iter()
            .map(|err| format!("ignoring config override: {err}"))
            .collect(),
        Err(err) => vec![format!("could not read page query: {err}")],
    };
    (config, problems)
}

#[component]
fn App(config: SiteConfig) -> impl IntoView {
    let listing = data::sample();
    let nav = Navigator::new();
    let stagger = Duration::from_millis(config.reveal.stagger_ms);

    let reveal_config = config.reveal.clone();
    Effect::new(move || reveal::install(&reveal_config));

    view! {
        <style>{styles::LANDING_CSS}</style>
        <Nav listing=listing nav=nav />
        <main>
            <Hero listing=listing nav=nav />
            <Stats listing=listing stagger=stagger />
            <Description listing=listing />
            <Amenities listing=listing stagger=stagger />
            <Gallery listing=listing />
            <Location listing=listing />
            <ContactSection listing=listing />
        </main>
        <Footer listing=listing year=config.copyright_year />
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use horizon_listing::icons::{ICON_CLOSE, ICON_MENU};
    use horizon_listing::nav::SectionId;
    use leptos::task::Executor;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn find(root: &Element, selector: &str) -> Option<Element> {
        root.query_selector(selector).expect("valid selector")
    }

    fn click(root: &Element, selector: &str) {
        find(root, selector)
            .expect("clickable element")
            .unchecked_into::<HtmlElement>()
            .click();
    }

    fn toggle_glyph(root: &Element) -> String {
        find(root, ".nav-toggle path")
            .and_then(|path| path.get_attribute("d"))
            .expect("toggle glyph")
    }

    #[wasm_bindgen_test]
    async fn rendered_page_has_sections_and_a_working_mobile_menu() {
        let document = dom::document().expect("document");
        let host = document.create_element("div").expect("create host");
        document
            .body()
            .expect("body")
            .append_child(&host)
            .expect("append host");

        let handle = leptos::mount::mount_to(host.clone().unchecked_into(), || {
            view! { <App config=SiteConfig::default() /> }
        });

        for section in SectionId::ALL {
            assert!(
                document.get_element_by_id(section.as_str()).is_some(),
                "missing #{section}"
            );
        }

        assert!(find(&host, ".mobile-menu").is_none());
        assert_eq!(toggle_glyph(&host), ICON_MENU);

        click(&host, ".nav-toggle");
        Executor::tick().await;
        assert!(find(&host, ".mobile-menu").is_some());
        assert_eq!(toggle_glyph(&host), ICON_CLOSE);

        click(&host, ".mobile-link");
        Executor::tick().await;
        assert!(find(&host, ".mobile-menu").is_none());
        assert_eq!(toggle_glyph(&host), ICON_MENU);

        drop(handle);
        host.remove();
    }
}
