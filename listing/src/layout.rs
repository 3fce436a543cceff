//! View models for the repeated page blocks.
//!
//! Each function maps one list in the listing to what the view needs per
//! item, one-to-one and in source order.

use crate::icons;
use crate::types::{Contact, PropertyListing};

const MAPS_SEARCH: &str = "https://www.google.com/maps/search/?api=1&query=";

/// A headline stat in the stats strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatTile<'a> {
    pub index: usize,
    pub label: &'a str,
    pub value: &'a str,
}

/// An amenities grid card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AmenityCard<'a> {
    pub index: usize,
    pub name: &'a str,
    pub icon_key: &'a str,
    /// Empty when `icon_key` is not a known icon
    pub glyph: &'static str,
}

/// A gallery image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryTile<'a> {
    pub index: usize,
    pub src: &'a str,
    pub alt: String,
    /// Spans the full grid row with a letterbox aspect ratio
    pub wide: bool,
}

pub fn stat_tiles(listing: &PropertyListing) -> Vec<StatTile<'_>> {
    listing
        .features
        .iter()
        .enumerate()
        .map(|(index, f)| StatTile {
            index,
            label: &f.label,
            value: &f.value,
        })
        .collect()
}

pub fn amenity_cards(listing: &PropertyListing) -> Vec<AmenityCard<'_>> {
    listing
        .amenities
        .iter()
        .enumerate()
        .map(|(index, a)| AmenityCard {
            index,
            name: &a.name,
            icon_key: &a.icon,
            glyph: icons::glyph(&a.icon),
        })
        .collect()
}

/// Every third image, starting with the first, is a wide tile.
pub fn gallery_tiles(listing: &PropertyListing) -> Vec<GalleryTile<'_>> {
    listing
        .gallery
        .iter()
        .enumerate()
        .map(|(index, src)| GalleryTile {
            index,
            src,
            alt: format!("Gallery {index}"),
            wide: index % 3 == 0,
        })
        .collect()
}

/// Wordmark used in the nav bar and footer.
pub fn brand_mark(name: &str) -> String {
    name.to_uppercase()
}

pub fn copyright_line(year: u16, name: &str) -> String {
    format!("© {year} {name}。保留所有權利。")
}

/// Google Maps search link for the sales office address.
pub fn map_search_url(contact: &Contact) -> String {
    format!("{MAPS_SEARCH}{}", urlencoding::encode(&contact.address))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use crate::types::Amenity;
    use pretty_assertions::assert_eq;

    #[test]
    fn stat_tiles_preserve_order() {
        let listing = data::sample();
        let labels: Vec<&str> = stat_tiles(listing).iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["臥室", "衛浴", "坪數", "完工年份"]);
    }

    #[test]
    fn amenity_cards_preserve_order_and_resolve_glyphs() {
        let listing = data::sample();
        let cards = amenity_cards(listing);
        let keys: Vec<&str> = cards.iter().map(|c| c.icon_key).collect();
        assert_eq!(
            keys,
            vec!["Waves", "Film", "UserCheck", "Cpu", "Trees", "Dumbbell"]
        );
        assert!(cards.iter().all(|c| !c.glyph.is_empty()));
        assert_eq!(
            cards.iter().map(|c| c.index).collect::<Vec<_>>(),
            (0..6).collect::<Vec<_>>()
        );
    }

    #[test]
    fn amenity_card_with_unknown_icon_keeps_its_slot() {
        let listing = PropertyListing {
            amenities: vec![
                Amenity {
                    name: "Wine Cellar".into(),
                    icon: "Grapes".into(),
                },
                Amenity {
                    name: "Pool".into(),
                    icon: "Waves".into(),
                },
            ],
            ..Default::default()
        };
        let cards = amenity_cards(&listing);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name, "Wine Cellar");
        assert_eq!(cards[0].glyph, "");
        assert!(!cards[1].glyph.is_empty());
    }

    #[test]
    fn gallery_tiles_preserve_order_and_mark_wide_slots() {
        let listing = data::sample();
        let tiles = gallery_tiles(listing);
        assert_eq!(tiles.len(), 4);
        for (tile, src) in tiles.iter().zip(&listing.gallery) {
            assert_eq!(tile.src, src.as_str());
        }
        let wide: Vec<bool> = tiles.iter().map(|t| t.wide).collect();
        assert_eq!(wide, vec![true, false, false, true]);
        assert_eq!(tiles[2].alt, "Gallery 2");
    }

    #[test]
    fn empty_listing_yields_empty_blocks() {
        let listing = PropertyListing::default();
        assert!(stat_tiles(&listing).is_empty());
        assert!(amenity_cards(&listing).is_empty());
        assert!(gallery_tiles(&listing).is_empty());
    }

    #[test]
    fn brand_mark_uppercases_latin_names() {
        assert_eq!(brand_mark("Azure Horizon"), "AZURE HORIZON");
        assert_eq!(brand_mark("蔚藍地平線"), "蔚藍地平線");
    }

    #[test]
    fn copyright_line_includes_year_and_name() {
        assert_eq!(
            copyright_line(2025, "蔚藍地平線"),
            "© 2025 蔚藍地平線。保留所有權利。"
        );
    }

    #[test]
    fn map_url_encodes_address() {
        let contact = Contact {
            address: "1 Harbor Rd & Pier".into(),
            ..Default::default()
        };
        assert_eq!(
            map_search_url(&contact),
            "https://www.google.com/maps/search/?api=1&query=1%20Harbor%20Rd%20%26%20Pier"
        );

        let url = map_search_url(&data::sample().contact);
        assert!(url.starts_with(MAPS_SEARCH));
        assert!(url.is_ascii());
    }
}
