//! # horizon-listing
//!
//! Static listing record and UI-independent page logic for the Azure Horizon
//! landing page.
//!
//! The Leptos view in `horizon-landing` is a thin layer over this crate:
//! everything that can be decided without a browser lives here, so it can be
//! tested natively.
//!
//! ## Architecture
//!
//! - [`types`] - The `PropertyListing` record and its sub-records
//! - [`data`] - The sample listing plus fixed page copy
//! - [`icons`] - Amenity icon keys and SVG glyph lookup
//! - [`nav`] - Section identifiers, mobile-menu state, scroll navigation
//! - [`layout`] - Ordered view models for the repeated page blocks
//! - [`motion`] - Scroll-reveal presets and stagger timing
//! - [`inquiry`] - Contact form draft (submit is intentionally unwired)
//! - [`config`] - Site configuration with query-string overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use horizon_listing::{data, layout};
//!
//! let listing = data::sample();
//! let tiles = layout::gallery_tiles(listing);
//! assert_eq!(tiles.len(), listing.gallery.len());
//! assert!(tiles[0].wide);
//! ```

pub mod config;
pub mod data;
pub mod icons;
pub mod inquiry;
pub mod layout;
pub mod motion;
pub mod nav;
pub mod types;

mod error;

pub use error::ListingError;
pub use types::PropertyListing;
