//! The listing the page is built from, plus fixed page copy.
//!
//! Built once on first access and never mutated afterwards.

use std::sync::LazyLock;

use crate::types::{Amenity, Contact, Feature, Neighborhood, PropertyListing};

/// The showcased property.
pub static PROPERTY: LazyLock<PropertyListing> = LazyLock::new(|| PropertyListing {
    name: "蔚藍地平線".into(),
    location: "台北市信義區".into(),
    price: "總價 1.2 億台幣起".into(),
    tagline: "重新定義都市優雅生活".into(),
    description: "在城市心臟地帶體驗奢華生活的巔峰。蔚藍地平線提供無與倫比的視野、量身定制的內裝，以及僅為少數人保留的尊榮生活方式。".into(),
    hero_image: "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?auto=format&fit=crop&q=80&w=1920".into(),
    features: vec![
        feature("臥室", "3-5 間"),
        feature("衛浴", "3.5 間"),
        feature("坪數", "85 - 135 坪"),
        feature("完工年份", "2025 年"),
    ],
    amenities: vec![
        amenity("無邊際泳池", "Waves"),
        amenity("私人劇院", "Film"),
        amenity("24/7 全天候管家", "UserCheck"),
        amenity("智慧家居系統", "Cpu"),
        amenity("空中花園", "Trees"),
        amenity("頂級健身中心", "Dumbbell"),
    ],
    gallery: vec![
        "https://images.unsplash.com/photo-1600607687940-4e2a09695d51?auto=format&fit=crop&q=80&w=800".into(),
        "https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3?auto=format&fit=crop&q=80&w=800".into(),
        "https://images.unsplash.com/photo-1600210492486-724fe5c67fb0?auto=format&fit=crop&q=80&w=800".into(),
        "https://images.unsplash.com/photo-1600585154526-990dced4db0d?auto=format&fit=crop&q=80&w=800".into(),
    ],
    neighborhood: Neighborhood {
        title: "信義核心地段".into(),
        description: "距離世界頂級餐飲、購物中心和文化地標僅幾步之遙。享受都市生活的便利，同時不犧牲寧靜與隱私。".into(),
        image: "https://images.unsplash.com/photo-1513415277900-a62401e19be4?auto=format&fit=crop&q=80&w=1200".into(),
    },
    contact: Contact {
        phone: "+886 2 2345 6789".into(),
        email: "sales@azurehorizon.com".into(),
        address: "台北市信義區松智路 1 號".into(),
    },
});

/// Shorthand for `&PROPERTY`.
pub fn sample() -> &'static PropertyListing {
    &PROPERTY
}

fn feature(label: &str, value: &str) -> Feature {
    Feature {
        label: label.into(),
        value: value.into(),
    }
}

fn amenity(name: &str, icon: &str) -> Amenity {
    Amenity {
        name: name.into(),
        icon: icon.into(),
    }
}

/// Fixed marketing copy that isn't part of the listing record.
pub mod copy {
    /// Hero call-to-action
    pub const HERO_CTA: &str = "預約私人鑑賞";

    /// Amenities eyebrow
    pub const AMENITIES_EYEBROW: &str = "精緻生活";
    /// Amenities heading
    pub const AMENITIES_TITLE: &str = "為品味人士量身打造的頂級設施";
    /// Amenities intro paragraph
    pub const AMENITIES_INTRO: &str =
        "每一個細節都經過精心設計，旨在提供無與倫比的居住體驗，將舒適與絕對的奢華完美結合。";
    /// Body text shared by every amenity card
    pub const AMENITY_BLURB: &str = "體驗為您的身心健康與娛樂量身打造的世界級設施。";

    /// Gallery eyebrow
    pub const GALLERY_EYEBROW: &str = "視覺饗宴";
    /// Gallery heading
    pub const GALLERY_TITLE: &str = "生活的藝術";

    /// Location eyebrow
    pub const LOCATION_EYEBROW: &str = "黃金地段";
    /// Map link label
    pub const MAP_LINK: &str = "在 Google 地圖上查看";

    /// Contact heading
    pub const CONTACT_TITLE: &str = "開啟您的尊榮旅程";
    /// Contact intro paragraph
    pub const CONTACT_INTRO: &str =
        "我們的顧問隨時為您提供私人諮詢與鑑賞安排。請留下您的聯絡資料，我們將儘快與您聯繫。";
    /// Caption above the phone number
    pub const CALL_US: &str = "致電我們";
    /// Caption above the email address
    pub const EMAIL_US: &str = "電子郵件";
    /// Submit button label
    pub const SUBMIT: &str = "送出諮詢";

    /// Footer links. They have no target pages.
    pub const FOOTER_LINKS: [(&str, &str); 3] = [
        ("privacy", "隱私權政策"),
        ("terms", "使用條款"),
        ("legal", "法律聲明"),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_expected_shape() {
        let listing = sample();
        assert_eq!(listing.features.len(), 4);
        assert_eq!(listing.amenities.len(), 6);
        assert_eq!(listing.gallery.len(), 4);
        assert!(!listing.neighborhood.image.is_empty());
        assert_eq!(listing.contact.email, "sales@azurehorizon.com");
    }

    #[test]
    fn sample_is_shared() {
        assert!(std::ptr::eq(sample(), sample()));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(sample()).expect("serialize listing");
        assert!(json.get("heroImage").is_some());
        assert_eq!(json["amenities"][0]["icon"], "Waves");
        assert_eq!(json["amenities"][5]["icon"], "Dumbbell");
    }
}
