//! Admin editor: state and edit operations over the content document.
//!
//! Every editable scalar field is described once in [`TEXT_FIELDS`]; the
//! table drives both [`apply_field`] and the editor form, so the form is
//! exhaustive by construction. Edits produce a new document snapshot
//! rather than mutating the caller's copy.

use crate::content::document::{ContentDocument, ImageSlot};
use thiserror::Error;

/// Editor misuse errors. These indicate a bad field key, slot, or index
/// reaching the edit path, not a user-facing failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("unknown content field `{0}`")]
    UnknownField(String),

    #[error("unknown product field `{0}`")]
    UnknownProductField(String),

    #[error("unknown image slot `{0}`")]
    UnknownSlot(String),

    #[error("product index {index} out of bounds (len {len})")]
    InvalidIndex { index: usize, len: usize },
}

// ============================================================================
// Sections and tabs
// ============================================================================

/// Named collapsible sections of the text tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Logo,
    Mission,
    Features,
    Shop,
    Products,
    Newsletter,
    Footer,
}

impl Section {
    pub const ALL: [Self; 8] = [
        Self::Hero,
        Self::Logo,
        Self::Mission,
        Self::Features,
        Self::Shop,
        Self::Products,
        Self::Newsletter,
        Self::Footer,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Logo => "logo",
            Self::Mission => "mission",
            Self::Features => "features",
            Self::Shop => "shop",
            Self::Products => "products",
            Self::Newsletter => "newsletter",
            Self::Footer => "footer",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Hero => "Hero Section",
            Self::Logo => "Logo & Brand",
            Self::Mission => "Mission Section",
            Self::Features => "Features",
            Self::Shop => "Shop Section",
            Self::Products => "Products",
            Self::Newsletter => "Newsletter",
            Self::Footer => "Footer",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.key() == key)
    }
}

/// The editor's two tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Text,
    Images,
}

impl Tab {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Images => "images",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "text" => Some(Self::Text),
            "images" => Some(Self::Images),
            _ => None,
        }
    }
}

// ============================================================================
// Editor state
// ============================================================================

/// Transient editor state: tab selection, which section is expanded, and
/// whether a reset is waiting on confirmation. Survives a content reset
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminState {
    pub tab: Tab,
    pub expanded: Option<Section>,
    pub confirm_reset: bool,
}

impl Default for AdminState {
    fn default() -> Self {
        Self {
            tab: Tab::Text,
            expanded: Some(Section::Hero),
            confirm_reset: false,
        }
    }
}

impl AdminState {
    /// Toggle a section: selecting the open section closes it with
    /// nothing expanded; selecting another switches to it.
    pub fn toggle_section(&mut self, section: Section) {
        self.expanded = if self.expanded == Some(section) {
            None
        } else {
            Some(section)
        };
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }
}

// ============================================================================
// Text field table
// ============================================================================

/// One editable scalar field: wire key, form label, owning section, and
/// accessors into the document.
pub struct TextField {
    pub key: &'static str,
    pub label: &'static str,
    pub section: Section,
    pub multiline: bool,
    pub get: fn(&ContentDocument) -> &str,
    pub set: fn(&mut ContentDocument, String),
}

macro_rules! text_field {
    ($section:ident, $key:literal, $label:literal, $field:ident) => {
        text_field!($section, $key, $label, $field, false)
    };
    ($section:ident, $key:literal, $label:literal, $field:ident, $multiline:literal) => {
        TextField {
            key: $key,
            label: $label,
            section: Section::$section,
            multiline: $multiline,
            get: |doc| doc.$field.as_str(),
            set: |doc, value| doc.$field = value,
        }
    };
}

/// Every editable scalar text field, in form display order.
pub const TEXT_FIELDS: &[TextField] = &[
    // Hero
    text_field!(Hero, "heroTagline", "Tagline", hero_tagline),
    text_field!(Hero, "heroHeadline1", "Headline Line 1", hero_headline1),
    text_field!(Hero, "heroHeadline2", "Headline Line 2", hero_headline2),
    text_field!(Hero, "heroSubtext", "Subtext", hero_subtext, true),
    text_field!(Hero, "heroCtaPrimary", "Primary Button", hero_cta_primary),
    text_field!(Hero, "heroCtaSecondary", "Secondary Button", hero_cta_secondary),
    // Logo & brand
    text_field!(Logo, "logoTitle", "Logo Title", logo_title),
    text_field!(Logo, "logoSubtitle", "Logo Subtitle", logo_subtitle),
    // Mission
    text_field!(Mission, "missionTitle", "Section Title", mission_title),
    text_field!(Mission, "missionParagraph", "Mission Paragraph", mission_paragraph, true),
    text_field!(Mission, "equationCoffee", "Equation: Quality Coffee", equation_coffee),
    text_field!(Mission, "equationMission", "Equation: Our Mission", equation_mission),
    text_field!(Mission, "equationResult", "Equation: Result Title", equation_result),
    text_field!(Mission, "equationResultSub", "Equation: Result Subtitle", equation_result_sub),
    // Features
    text_field!(Features, "feature1Title", "Feature 1 Title", feature1_title),
    text_field!(Features, "feature1Desc", "Feature 1 Description", feature1_desc, true),
    text_field!(Features, "feature2Title", "Feature 2 Title", feature2_title),
    text_field!(Features, "feature2Desc", "Feature 2 Description", feature2_desc, true),
    text_field!(Features, "feature3Title", "Feature 3 Title", feature3_title),
    text_field!(Features, "feature3Desc", "Feature 3 Description", feature3_desc, true),
    // Shop
    text_field!(Shop, "shopTagline", "Tagline", shop_tagline),
    text_field!(Shop, "shopTitle", "Title", shop_title),
    text_field!(Shop, "shopViewAll", "View All Button", shop_view_all),
    // Newsletter
    text_field!(Newsletter, "newsletterTitle", "Title", newsletter_title),
    text_field!(Newsletter, "newsletterSubtext", "Subtext", newsletter_subtext, true),
    text_field!(Newsletter, "newsletterButton", "Button Text", newsletter_button),
    text_field!(Newsletter, "newsletterPlaceholder", "Placeholder", newsletter_placeholder),
    // Footer
    text_field!(Footer, "footerBrandTitle", "Brand Title", footer_brand_title),
    text_field!(Footer, "footerBrandSubtitle", "Brand Subtitle", footer_brand_subtitle),
    text_field!(Footer, "footerAbout", "About Paragraph", footer_about, true),
    text_field!(Footer, "footerQuickLinksTitle", "Quick Links Title", footer_quick_links_title),
    text_field!(Footer, "footerContactTitle", "Contact Title", footer_contact_title),
    text_field!(Footer, "footerLinkHome", "Link: Home", footer_link_home),
    text_field!(Footer, "footerLinkAbout", "Link: About Us", footer_link_about),
    text_field!(Footer, "footerLinkSupport", "Link: Who We Support", footer_link_support),
    text_field!(Footer, "footerLinkShop", "Link: Shop", footer_link_shop),
    text_field!(Footer, "footerEmail", "Email", footer_email),
    text_field!(Footer, "footerInstagramText", "Instagram Text", footer_instagram_text),
    text_field!(Footer, "footerCopyright", "Copyright", footer_copyright),
    text_field!(Footer, "footerTagline", "Tagline", footer_tagline),
];

/// Fields belonging to one section, in table order.
pub fn fields_in(section: Section) -> impl Iterator<Item = &'static TextField> {
    TEXT_FIELDS.iter().filter(move |field| field.section == section)
}

// ============================================================================
// Product fields
// ============================================================================

/// Editable fields of a single product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Name,
    Roast,
    Price,
    Description,
    Image,
}

impl ProductField {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Roast => "roast",
            Self::Price => "price",
            Self::Description => "description",
            Self::Image => "image",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "name" => Some(Self::Name),
            "roast" => Some(Self::Roast),
            "price" => Some(Self::Price),
            "description" => Some(Self::Description),
            "image" => Some(Self::Image),
            _ => None,
        }
    }
}

/// Coerce a price entry to a non-negative number. Anything that does not
/// parse as a finite non-negative float becomes 0.
pub fn coerce_price(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
        .unwrap_or(0.0)
}

// ============================================================================
// Edit operations
// ============================================================================

/// New document with one scalar text field set to `value`.
pub fn apply_field(
    doc: &ContentDocument,
    key: &str,
    value: &str,
) -> Result<ContentDocument, EditError> {
    let field = TEXT_FIELDS
        .iter()
        .find(|field| field.key == key)
        .ok_or_else(|| EditError::UnknownField(key.to_string()))?;

    let mut next = doc.clone();
    (field.set)(&mut next, value.to_string());
    Ok(next)
}

/// New document with one field of the product at `index` replaced.
pub fn apply_product(
    doc: &ContentDocument,
    index: usize,
    field: ProductField,
    value: &str,
) -> Result<ContentDocument, EditError> {
    if index >= doc.products.len() {
        return Err(EditError::InvalidIndex {
            index,
            len: doc.products.len(),
        });
    }

    let mut next = doc.clone();
    let product = &mut next.products[index];
    match field {
        ProductField::Name => product.name = value.to_string(),
        ProductField::Roast => product.roast = value.to_string(),
        ProductField::Price => product.price = coerce_price(value),
        ProductField::Description => product.description = value.to_string(),
        ProductField::Image => product.image = value.to_string(),
    }
    Ok(next)
}

/// New document with one image slot replaced, all others preserved.
pub fn apply_image(doc: &ContentDocument, slot: ImageSlot, value: &str) -> ContentDocument {
    let mut next = doc.clone();
    next.images.set(slot, value.to_string());
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_field_sets_only_that_field() {
        let doc = ContentDocument::default();
        let next = apply_field(&doc, "heroTagline", "New Tagline").unwrap();
        assert_eq!(next.hero_tagline, "New Tagline");
        assert_eq!(next.hero_headline1, doc.hero_headline1);
        // Original snapshot is untouched.
        assert_eq!(doc.hero_tagline, "Serving the Lord Since 2020");
    }

    #[test]
    fn test_apply_field_unknown_key() {
        let doc = ContentDocument::default();
        assert_eq!(
            apply_field(&doc, "nope", "x"),
            Err(EditError::UnknownField("nope".into()))
        );
    }

    #[test]
    fn test_every_field_key_is_unique() {
        for (i, field) in TEXT_FIELDS.iter().enumerate() {
            assert!(
                TEXT_FIELDS[i + 1..].iter().all(|other| other.key != field.key),
                "duplicate field key {}",
                field.key
            );
        }
    }

    #[test]
    fn test_field_keys_match_wire_keys() {
        // Setting through the table must land on the same key the
        // document serializes under.
        let doc = ContentDocument::default();
        for field in TEXT_FIELDS {
            let next = apply_field(&doc, field.key, "marker").unwrap();
            let json = serde_json::to_value(&next).unwrap();
            assert_eq!(json[field.key], "marker", "field {}", field.key);
        }
    }

    #[test]
    fn test_apply_product_price_parses() {
        let doc = ContentDocument::default();
        let next = apply_product(&doc, 1, ProductField::Price, "7.50").unwrap();
        assert_eq!(next.products[1].price, 7.5);
    }

    #[test]
    fn test_apply_product_price_invalid_becomes_zero() {
        let doc = ContentDocument::default();
        let next = apply_product(&doc, 1, ProductField::Price, "abc").unwrap();
        assert_eq!(next.products[1].price, 0.0);
    }

    #[test]
    fn test_coerce_price_edge_cases() {
        assert_eq!(coerce_price("7.50"), 7.5);
        assert_eq!(coerce_price(" 12 "), 12.0);
        assert_eq!(coerce_price("abc"), 0.0);
        assert_eq!(coerce_price(""), 0.0);
        assert_eq!(coerce_price("-3"), 0.0);
        assert_eq!(coerce_price("NaN"), 0.0);
        assert_eq!(coerce_price("inf"), 0.0);
    }

    #[test]
    fn test_apply_product_out_of_bounds() {
        let doc = ContentDocument::default();
        assert_eq!(
            apply_product(&doc, 3, ProductField::Name, "x"),
            Err(EditError::InvalidIndex { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_apply_product_preserves_siblings() {
        let doc = ContentDocument::default();
        let next = apply_product(&doc, 0, ProductField::Name, "Colombia").unwrap();
        assert_eq!(next.products[0].name, "Colombia");
        assert_eq!(next.products[0].id, 1);
        assert_eq!(next.products[1], doc.products[1]);
        assert_eq!(next.products[2], doc.products[2]);
    }

    #[test]
    fn test_apply_image_preserves_other_slots() {
        let doc = ContentDocument::default();
        let next = apply_image(&doc, ImageSlot::HeroBackground, "X");
        assert_eq!(next.images.hero_background, "X");
        assert_eq!(next.images.footer_background, doc.images.footer_background);
    }

    #[test]
    fn test_toggle_section_closes_open_section() {
        let mut admin = AdminState::default();
        assert_eq!(admin.expanded, Some(Section::Hero));

        admin.toggle_section(Section::Shop);
        assert_eq!(admin.expanded, Some(Section::Shop));

        // Toggling the open section leaves nothing expanded.
        admin.toggle_section(Section::Shop);
        assert_eq!(admin.expanded, None);

        admin.toggle_section(Section::Footer);
        assert_eq!(admin.expanded, Some(Section::Footer));
    }

    #[test]
    fn test_section_and_tab_keys_roundtrip() {
        for section in Section::ALL {
            assert_eq!(Section::from_key(section.key()), Some(section));
        }
        assert_eq!(Tab::from_key("images"), Some(Tab::Images));
        assert_eq!(Tab::from_key("nope"), None);
    }
}
