//! Site configuration.
//!
//! The page has no environment to read from, so defaults are compiled in
//! and a handful of keys can be overridden from the page URL's query string
//! (e.g. `?log=debug&stagger=50`).

use serde::{Deserialize, Serialize};

use crate::ListingError;

/// Top-level page configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Year printed in the footer
    pub copyright_year: u16,
    /// `tracing` filter directive
    pub log_filter: String,
    /// Scroll-reveal tuning
    pub reveal: RevealConfig,
}

/// IntersectionObserver and stagger settings for reveal animations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of the element that must be visible, 0.0 to 1.0
    pub threshold: f64,
    /// CSS margin applied to the viewport before intersecting
    pub root_margin: String,
    /// Delay between consecutive items of a staggered list
    pub stagger_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            copyright_year: 2025,
            log_filter: "info".into(),
            reveal: RevealConfig::default(),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".into(),
            stagger_ms: 100,
        }
    }
}

impl SiteConfig {
    /// Apply `key=value` overrides from a URL query string.
    ///
    /// Accepts a leading `?` and form encoding (`+` for space). Recognised
    /// keys are `log`, `stagger` and `threshold`; anything else is ignored.
    /// A malformed value leaves its setting untouched and is returned as
    /// [`ListingError::InvalidConfig`]; the remaining overrides still apply.
    pub fn apply_query(&mut self, query: &str) -> Vec<ListingError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut rejected = Vec::new();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            if let Err(err) = self.apply_one(key, decode(raw)) {
                rejected.push(err);
            }
        }
        rejected
    }

    fn apply_one(&mut self, key: &str, value: String) -> Result<(), ListingError> {
        match key {
            "log" if !value.is_empty() => self.log_filter = value,
            "log" => return Err(invalid("log", value)),
            "stagger" => {
                self.reveal.stagger_ms = value.parse().map_err(|_| invalid("stagger", value))?;
            }
            "threshold" => match value.parse::<f64>() {
                Ok(t) if (0.0..=1.0).contains(&t) => self.reveal.threshold = t,
                _ => return Err(invalid("threshold", value)),
            },
            _ => {}
        }
        Ok(())
    }
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(value) => value.into_owned(),
        Err(_) => spaced,
    }
}

fn invalid(key: &'static str, value: String) -> ListingError {
    ListingError::InvalidConfig { key, value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_design() {
        let config = SiteConfig::default();
        assert_eq!(config.copyright_year, 2025);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.reveal.stagger_ms, 100);
    }

    #[test]
    fn query_overrides_known_keys() {
        let mut config = SiteConfig::default();
        let rejected =
            config.apply_query("?log=horizon_landing%3Ddebug&stagger=50&threshold=0.25");
        assert!(rejected.is_empty());
        assert_eq!(config.log_filter, "horizon_landing=debug");
        assert_eq!(config.reveal.stagger_ms, 50);
        assert_eq!(config.reveal.threshold, 0.25);
    }

    #[test]
    fn plus_decodes_to_space() {
        let mut config = SiteConfig::default();
        assert!(config.apply_query("?log=info+horizon_landing%3Ddebug").is_empty());
        assert_eq!(config.log_filter, "info horizon_landing=debug");

        assert!(config.apply_query("log=a%2Bb").is_empty());
        assert_eq!(config.log_filter, "a+b");
    }

    #[test]
    fn unknown_keys_and_empty_query_are_ignored() {
        let mut config = SiteConfig::default();
        assert!(config.apply_query("").is_empty());
        assert!(config.apply_query("?utm_source=mail&&ref").is_empty());
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn malformed_values_are_rejected() {
        let mut config = SiteConfig::default();
        assert_eq!(
            config.apply_query("stagger=fast"),
            vec![ListingError::InvalidConfig {
                key: "stagger",
                value: "fast".into()
            }]
        );
        assert_eq!(config.apply_query("threshold=1.5").len(), 1);
        assert_eq!(config.apply_query("log=").len(), 1);
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn bad_override_does_not_block_good_ones() {
        // bad key after a good one
        let mut config = SiteConfig::default();
        let rejected = config.apply_query("?stagger=50&threshold=2");
        assert_eq!(
            rejected,
            vec![ListingError::InvalidConfig {
                key: "threshold",
                value: "2".into()
            }]
        );
        assert_eq!(config.reveal.stagger_ms, 50);
        assert_eq!(config.reveal.threshold, 0.1);

        // bad key before a good one
        let mut config = SiteConfig::default();
        let rejected = config.apply_query("?stagger=fast&log=debug");
        assert_eq!(rejected.len(), 1);
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.reveal.stagger_ms, 100);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: SiteConfig =
            serde_json::from_str(r#"{"reveal":{"stagger_ms":80}}"#).expect("parse config");
        assert_eq!(config.reveal.stagger_ms, 80);
        assert_eq!(config.reveal.threshold, 0.1);
        assert_eq!(config.log_filter, "info");
    }
}
