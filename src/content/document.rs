//! The content document: every editable piece of the site in one record.
//!
//! The document is a flat set of text fields plus the product list and the
//! named image slots. It serializes with camelCase keys, which is also the
//! exact layout of the persisted value (see [`crate::content::store`]).
//!
//! `Default` returns the canonical site copy. The defaults double as a
//! migration mechanism: any field missing from a stored document resolves
//! to its default on load, so adding a field here backfills old data
//! without explicit versioning.

use serde::{Deserialize, Serialize};

/// One sellable item's display record.
///
/// `id` is assigned at creation and never reused; uniqueness is assumed,
/// not enforced. `price` is kept non-negative by the edit path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub roast: String,
    pub price: f64,
    pub description: String,
    pub image: String,
}

/// The fixed set of named image slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteImages {
    pub hero_background: String,
    pub equation_coffee: String,
    pub equation_mission: String,
    pub footer_background: String,
}

/// Identifies one entry of [`SiteImages`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    HeroBackground,
    EquationCoffee,
    EquationMission,
    FooterBackground,
}

impl ImageSlot {
    pub const ALL: [Self; 4] = [
        Self::HeroBackground,
        Self::EquationCoffee,
        Self::EquationMission,
        Self::FooterBackground,
    ];

    /// Wire key, matching the serialized field name.
    pub const fn key(self) -> &'static str {
        match self {
            Self::HeroBackground => "heroBackground",
            Self::EquationCoffee => "equationCoffee",
            Self::EquationMission => "equationMission",
            Self::FooterBackground => "footerBackground",
        }
    }

    /// Label shown in the editor's images tab.
    pub const fn label(self) -> &'static str {
        match self {
            Self::HeroBackground => "Hero Background",
            Self::EquationCoffee => "Mission: Coffee Image",
            Self::EquationMission => "Mission: Bible/Mission Image",
            Self::FooterBackground => "Footer Background",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.key() == key)
    }
}

impl SiteImages {
    pub fn get(&self, slot: ImageSlot) -> &str {
        match slot {
            ImageSlot::HeroBackground => &self.hero_background,
            ImageSlot::EquationCoffee => &self.equation_coffee,
            ImageSlot::EquationMission => &self.equation_mission,
            ImageSlot::FooterBackground => &self.footer_background,
        }
    }

    pub fn set(&mut self, slot: ImageSlot, url: String) {
        match slot {
            ImageSlot::HeroBackground => self.hero_background = url,
            ImageSlot::EquationCoffee => self.equation_coffee = url,
            ImageSlot::EquationMission => self.equation_mission = url,
            ImageSlot::FooterBackground => self.footer_background = url,
        }
    }
}

impl Default for SiteImages {
    fn default() -> Self {
        Self {
            hero_background: "https://images.unsplash.com/photo-1497935586351-b67a49e012bf?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&q=80".into(),
            equation_coffee: "https://images.unsplash.com/photo-1559525839-b184a4d698c7?auto=format&fit=crop&w=800&q=80".into(),
            equation_mission: "https://images.unsplash.com/photo-1504052434569-70ad5836ab65?auto=format&fit=crop&w=800&q=80".into(),
            footer_background: "https://images.unsplash.com/photo-1511556820780-d912e42b4980?auto=format&fit=crop&w=1920&q=80".into(),
        }
    }
}

/// The single record holding all editable site text, product data, and
/// image URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentDocument {
    // Logo
    pub logo_title: String,
    pub logo_subtitle: String,

    // Hero
    pub hero_tagline: String,
    pub hero_headline1: String,
    pub hero_headline2: String,
    pub hero_subtext: String,
    pub hero_cta_primary: String,
    pub hero_cta_secondary: String,

    // Mission
    pub mission_title: String,
    pub mission_paragraph: String,
    pub equation_coffee: String,
    pub equation_mission: String,
    pub equation_result: String,
    pub equation_result_sub: String,

    // Features
    pub feature1_title: String,
    pub feature1_desc: String,
    pub feature2_title: String,
    pub feature2_desc: String,
    pub feature3_title: String,
    pub feature3_desc: String,

    // Shop
    pub shop_tagline: String,
    pub shop_title: String,
    pub shop_view_all: String,

    /// Display order is significant.
    pub products: Vec<Product>,

    // Newsletter
    pub newsletter_title: String,
    pub newsletter_subtext: String,
    pub newsletter_button: String,
    pub newsletter_placeholder: String,

    // Footer
    pub footer_brand_title: String,
    pub footer_brand_subtitle: String,
    pub footer_about: String,
    pub footer_quick_links_title: String,
    pub footer_contact_title: String,
    pub footer_link_home: String,
    pub footer_link_about: String,
    pub footer_link_support: String,
    pub footer_link_shop: String,
    pub footer_email: String,
    pub footer_instagram_text: String,
    pub footer_copyright: String,
    pub footer_tagline: String,

    pub images: SiteImages,
}

impl Default for ContentDocument {
    fn default() -> Self {
        Self {
            logo_title: "Wise Men".into(),
            logo_subtitle: "Coffee Co.".into(),

            hero_tagline: "Serving the Lord Since 2020".into(),
            hero_headline1: "Quality Coffee.".into(),
            hero_headline2: "Kingdom Impact.".into(),
            hero_subtext: "Start your day with purpose. Every cup supports local churches and global missionaries.".into(),
            hero_cta_primary: "Shop Roasts".into(),
            hero_cta_secondary: "Our Mission".into(),

            mission_title: "Who We Are".into(),
            mission_paragraph: "Our mission is to grow the Lord's Kingdom whether by supporting local church or missionaries. We believe quality coffee paired with this mission is an excellent way to give back to the Lord with an everyday item.".into(),
            equation_coffee: "QUALITY COFFEE".into(),
            equation_mission: "OUR MISSION".into(),
            equation_result: "Wise Men".into(),
            equation_result_sub: "Coffee Co.".into(),

            feature1_title: "Premium Roasts".into(),
            feature1_desc: "Carefully selected beans from the finest growing regions, roasted to perfection.".into(),
            feature2_title: "Kingdom Driven".into(),
            feature2_desc: "Every purchase directly supports local churches and global missionary work.".into(),
            feature3_title: "Ethically Sourced".into(),
            feature3_desc: "We ensure fair practices that honor the farmers and communities we partner with.".into(),

            shop_tagline: "Freshly Roasted".into(),
            shop_title: "Shop Our Beans".into(),
            shop_view_all: "View All Products".into(),

            products: vec![
                Product {
                    id: 1,
                    name: "Costa Rica".into(),
                    roast: "Medium Roast".into(),
                    price: 20.00,
                    description: "Balanced and smooth with notes of honey and citrus.".into(),
                    image: "https://images.unsplash.com/photo-1559525839-b184a4d698c7?auto=format&fit=crop&w=600&q=80".into(),
                },
                Product {
                    id: 2,
                    name: "Ethiopia".into(),
                    roast: "Light Roast".into(),
                    price: 20.00,
                    description: "Bright and floral with a delicate tea-like body.".into(),
                    image: "https://images.unsplash.com/photo-1587734195503-904fca47e0e9?auto=format&fit=crop&w=600&q=80".into(),
                },
                Product {
                    id: 3,
                    name: "Sumatra".into(),
                    roast: "Dark Roast".into(),
                    price: 20.00,
                    description: "Earthy, full-bodied, and rich with a dark chocolate finish.".into(),
                    image: "https://images.unsplash.com/photo-1611162458324-aae1eb4129a4?auto=format&fit=crop&w=600&q=80".into(),
                },
            ],

            newsletter_title: "Join the Wise Men Community".into(),
            newsletter_subtext: "Subscribe to our newsletter for updates on new roasts, mission impacts, and exclusive offers.".into(),
            newsletter_button: "Subscribe".into(),
            newsletter_placeholder: "Enter your email address".into(),

            footer_brand_title: "Wise Men".into(),
            footer_brand_subtitle: "Coffee Co.".into(),
            footer_about: "Serving the Lord since 2020. Dedicated to providing premium coffee while supporting the growth of the Kingdom through local churches and missionaries worldwide.".into(),
            footer_quick_links_title: "Quick Links".into(),
            footer_contact_title: "Contact".into(),
            footer_link_home: "Home".into(),
            footer_link_about: "About Us".into(),
            footer_link_support: "Who We Support".into(),
            footer_link_shop: "Shop".into(),
            footer_email: "wisemencoffeeco@gmail.com".into(),
            footer_instagram_text: "Follow our journey".into(),
            footer_copyright: "Wise Men Coffee Co. All rights reserved.".into(),
            footer_tagline: "Serving the Lord with every cup.".into(),

            images: SiteImages::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_shape() {
        let doc = ContentDocument::default();
        assert_eq!(doc.hero_tagline, "Serving the Lord Since 2020");
        assert_eq!(doc.products.len(), 3);
        assert_eq!(doc.products[0].name, "Costa Rica");
        assert_eq!(doc.products[2].id, 3);
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let doc = ContentDocument::default();
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.get("heroTagline").is_some());
        assert!(json.get("footerQuickLinksTitle").is_some());
        assert!(json["images"].get("heroBackground").is_some());
        assert!(json.get("hero_tagline").is_none());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let doc: ContentDocument =
            serde_json::from_str(r#"{"heroTagline": "New Tagline"}"#).unwrap();
        assert_eq!(doc.hero_tagline, "New Tagline");
        assert_eq!(doc.logo_title, "Wise Men");
        assert_eq!(doc.products.len(), 3);
    }

    #[test]
    fn test_image_slot_key_roundtrip() {
        for slot in ImageSlot::ALL {
            assert_eq!(ImageSlot::from_key(slot.key()), Some(slot));
        }
        assert_eq!(ImageSlot::from_key("unknown"), None);
    }

    #[test]
    fn test_image_slot_accessors() {
        let mut images = SiteImages::default();
        images.set(ImageSlot::HeroBackground, "X".into());
        assert_eq!(images.get(ImageSlot::HeroBackground), "X");
        assert_eq!(
            images.get(ImageSlot::FooterBackground),
            SiteImages::default().footer_background
        );
    }
}
