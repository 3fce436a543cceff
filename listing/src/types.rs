//! Listing data types.
//!
//! These types define the record the whole page is rendered from. They're
//! designed to be:
//!
//! - **Serializable** - JSON import/export via serde
//! - **Clone-friendly** - view components can take what they need
//! - **Default-able** - build partial listings with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use horizon_listing::types::{Amenity, PropertyListing};
//!
//! let listing = PropertyListing {
//!     name: "Harbor Point".into(),
//!     amenities: vec![Amenity {
//!         name: "Rooftop Pool".into(),
//!         icon: "Waves".into(),
//!     }],
//!     ..Default::default()
//! };
//! assert_eq!(listing.amenities.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// The showcased property.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListing {
    /// Display name of the development
    pub name: String,
    /// District / city line shown above the tagline
    pub location: String,
    /// Asking price line
    #[serde(default)]
    pub price: String,
    /// Hero headline
    pub tagline: String,
    /// Long-form pitch rendered in the description block
    pub description: String,
    /// Full-bleed hero image URL
    pub hero_image: String,
    /// Headline stats, in display order
    #[serde(default)]
    pub features: Vec<Feature>,
    /// Amenities grid, in display order
    #[serde(default)]
    pub amenities: Vec<Amenity>,
    /// Gallery image URLs, in display order
    #[serde(default)]
    pub gallery: Vec<String>,
    /// Location section content
    pub neighborhood: Neighborhood,
    /// Sales office contact details
    pub contact: Contact,
}

/// A single headline stat such as bedroom count or floor area.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Small caps label
    pub label: String,
    /// Large value text
    pub value: String,
}

/// An amenity card.
///
/// `icon` is a key into [`crate::icons`]; keys that don't resolve render
/// without a glyph.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenity {
    /// Amenity name
    pub name: String,
    /// Icon key, e.g. `"Waves"`
    pub icon: String,
}

/// Neighborhood blurb for the location section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighborhood {
    /// Section headline
    pub title: String,
    /// Paragraph under the headline
    pub description: String,
    /// Side image URL
    pub image: String,
}

/// Sales office contact details.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Phone number, display formatted
    pub phone: String,
    /// Sales email address
    pub email: String,
    /// Street address
    pub address: String,
}
