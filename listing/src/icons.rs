//! Stroke icons for the landing page.
//!
//! Glyphs are SVG path data (the `d` attribute) drawn on a 24×24 viewBox
//! with round caps, in the Lucide outline style. Amenity icons are looked up
//! by the string key stored in the listing; anything else is a plain
//! constant.

/// Amenity icon keys with a known glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AmenityIcon {
    /// Pool / water features
    Waves,
    /// Private cinema
    Film,
    /// Concierge service
    UserCheck,
    /// Smart home system
    Cpu,
    /// Gardens and green space
    Trees,
    /// Fitness center
    Dumbbell,
}

impl AmenityIcon {
    /// Every amenity icon, in declaration order.
    pub const ALL: [AmenityIcon; 6] = [
        AmenityIcon::Waves,
        AmenityIcon::Film,
        AmenityIcon::UserCheck,
        AmenityIcon::Cpu,
        AmenityIcon::Trees,
        AmenityIcon::Dumbbell,
    ];

    /// Resolve a listing icon key. Matching is exact and case-sensitive.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.key() == key)
    }

    /// The key this icon is stored under in listing data.
    pub const fn key(self) -> &'static str {
        match self {
            AmenityIcon::Waves => "Waves",
            AmenityIcon::Film => "Film",
            AmenityIcon::UserCheck => "UserCheck",
            AmenityIcon::Cpu => "Cpu",
            AmenityIcon::Trees => "Trees",
            AmenityIcon::Dumbbell => "Dumbbell",
        }
    }

    /// SVG path data for this icon.
    pub const fn path(self) -> &'static str {
        match self {
            AmenityIcon::Waves => ICON_WAVES,
            AmenityIcon::Film => ICON_FILM,
            AmenityIcon::UserCheck => ICON_USER_CHECK,
            AmenityIcon::Cpu => ICON_CPU,
            AmenityIcon::Trees => ICON_TREES,
            AmenityIcon::Dumbbell => ICON_DUMBBELL,
        }
    }
}

/// Glyph for an amenity icon key, or `""` when the key is unknown.
///
/// ```rust
/// use horizon_listing::icons::glyph;
///
/// assert!(!glyph("Waves").is_empty());
/// assert_eq!(glyph("Helipad"), "");
/// ```
pub fn glyph(key: &str) -> &'static str {
    AmenityIcon::from_key(key).map_or("", AmenityIcon::path)
}

// =============================================================================
// Amenity glyphs
// =============================================================================

/// Three stacked waves
pub const ICON_WAVES: &str = "M2 6c.6.5 1.2 1 2.5 1C7 7 7 5 9.5 5c2.6 0 2.4 2 5 2 2.5 0 2.5-2 5-2 1.3 0 1.9.5 2.5 1M2 12c.6.5 1.2 1 2.5 1 2.5 0 2.5-2 5-2 2.6 0 2.4 2 5 2 2.5 0 2.5-2 5-2 1.3 0 1.9.5 2.5 1M2 18c.6.5 1.2 1 2.5 1 2.5 0 2.5-2 5-2 2.6 0 2.4 2 5 2 2.5 0 2.5-2 5-2 1.3 0 1.9.5 2.5 1";

/// Film strip
pub const ICON_FILM: &str = "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2ZM7 3v18M3 7.5h4M3 12h18M3 16.5h4M17 3v18M17 7.5h4M17 16.5h4";

/// Person with a check mark
pub const ICON_USER_CHECK: &str = "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M5 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0M16 11l2 2 4-4";

/// Processor chip
pub const ICON_CPU: &str = "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2ZM9 9h6v6H9ZM15 2v2M15 20v2M2 15h2M2 9h2M20 15h2M20 9h2M9 2v2M9 20v2";

/// Deciduous and pine tree pair
pub const ICON_TREES: &str = "M10 10v.2A3 3 0 0 1 8.9 16H5a3 3 0 0 1-1-5.8V10a3 3 0 0 1 6 0ZM7 16v6M13 19v3M12 19h8.3a1 1 0 0 0 .7-1.7L18 14h.3a1 1 0 0 0 .7-1.7L16 9h.2a1 1 0 0 0 .8-1.7L13 3l-1.4 1.5";

/// Dumbbell
pub const ICON_DUMBBELL: &str = "M14.4 14.4 9.6 9.6M18.657 21.485a2 2 0 1 1-2.829-2.828l-1.767 1.768a2 2 0 1 1-2.829-2.829l6.364-6.364a2 2 0 1 1 2.829 2.829l-1.768 1.767a2 2 0 1 1 2.828 2.829zM21.5 21.5l-1.4-1.4M3.9 3.9 2.5 2.5M6.404 12.768a2 2 0 1 1-2.829-2.829l1.768-1.767a2 2 0 1 1-2.828-2.829l2.828-2.828a2 2 0 1 1 2.829 2.828l1.767-1.768a2 2 0 1 1 2.829 2.829z";

// =============================================================================
// Interface glyphs
// =============================================================================

/// Map pin
pub const ICON_MAP_PIN: &str = "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0ZM9 10a3 3 0 1 0 6 0a3 3 0 1 0-6 0";

/// Telephone handset
pub const ICON_PHONE: &str = "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z";

/// Envelope
pub const ICON_MAIL: &str = "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2ZM22 7l-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7";

/// Right arrow
pub const ICON_ARROW_RIGHT: &str = "M5 12h14M12 5l7 7-7 7";

/// Right chevron
pub const ICON_CHEVRON_RIGHT: &str = "M9 18l6-6-6-6";

/// Hamburger menu
pub const ICON_MENU: &str = "M4 12h16M4 6h16M4 18h16";

/// Close (X)
pub const ICON_CLOSE: &str = "M18 6 6 18M6 6l12 12";
