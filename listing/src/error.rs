use thiserror::Error;

/// Errors surfaced by listing-side parsing.
///
/// Rendering itself never fails: unknown icon keys and missing scroll
/// targets are silent no-ops and do not go through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    /// A string did not name one of the page sections.
    #[error("unknown section identifier: {0:?}")]
    UnknownSection(String),

    /// A configuration override could not be parsed.
    #[error("invalid value for `{key}`: {value:?}")]
    InvalidConfig {
        /// Query key that carried the value
        key: &'static str,
        /// Raw value as received
        value: String,
    },
}
