//! # Domain Types
//!
//! Core domain types for the EcoThread storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  ProductDraft   │   │   Category      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  admin form     │   │  Men            │       │
//! │  │  price_cents    │   │  payload, pre-  │   │  Women          │       │
//! │  │  footprint_kg   │   │  validation     │   └─────────────────┘       │
//! │  │  verification   │   └─────────────────┘                             │
//! │  └─────────────────┘        Size, Color: closed label sets             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Verification Invariant
//! `is_eco_verified` is true iff a carbon certificate reference is present.
//! The original storefront derived this inside a form handler, which let any
//! other construction site set the two fields inconsistently. Here both
//! fields are private and every `Product` is built through the authoring
//! path ([`Product::new`] / [`Product::revised`]), so the invariant holds by
//! construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreResult;
use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// Product category. Closed set: the storefront sells two collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Men,
    Women,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Men => write!(f, "men"),
            Category::Women => write!(f, "women"),
        }
    }
}

// =============================================================================
// Size
// =============================================================================

/// Garment size. Closed label set offered by the admin form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum Size {
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
}

impl Size {
    /// All sizes, in display order.
    pub const ALL: [Size; 6] = [Size::Xs, Size::S, Size::M, Size::L, Size::Xl, Size::Xxl];

    /// The display label ("XS", "M", ...).
    pub const fn label(&self) -> &'static str {
        match self {
            Size::Xs => "XS",
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::Xl => "XL",
            Size::Xxl => "XXL",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Color
// =============================================================================

/// Garment color. Closed label set offered by the admin form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Color {
    Black,
    White,
    Gray,
    Navy,
    Burgundy,
    Red,
    Blue,
    Green,
    Beige,
    Gold,
    Emerald,
}

impl Color {
    /// The display label ("Black", "Navy", ...).
    pub const fn label(&self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::White => "White",
            Color::Gray => "Gray",
            Color::Navy => "Navy",
            Color::Burgundy => "Burgundy",
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Beige => "Beige",
            Color::Gold => "Gold",
            Color::Emerald => "Emerald",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Product Draft
// =============================================================================

/// The authoring payload for creating or editing a product.
///
/// This is what the admin form submits. Note what is absent: the id, the
/// creation timestamp, and the verification flag are all assigned by the
/// construction path, never by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    /// Display name shown on cards and the detail page.
    pub name: String,

    /// Short marketing description.
    pub description: String,

    /// List price in cents.
    pub price_cents: i64,

    /// Collection this product belongs to.
    pub category: Category,

    /// Sizes offered. Must be non-empty.
    pub sizes: Vec<Size>,

    /// Colors offered. Must be non-empty.
    pub colors: Vec<Color>,

    /// Image references (paths or URLs). May be empty; the UI falls back
    /// to a placeholder.
    pub images: Vec<String>,

    /// Whether the product is currently purchasable.
    pub in_stock: bool,

    /// Whether the product is featured on the home page.
    pub featured: bool,

    /// Manufacturing footprint in kg CO2 equivalent.
    pub carbon_footprint_kg: f64,

    /// Reference to an uploaded carbon certificate, if any.
    /// Presence of this reference is what makes a product eco-verified.
    pub carbon_certificate: Option<String>,
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// Immutable reference record: cart lines snapshot the product as it was
/// at add time, so edits to the catalog never rewrite an open cart.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Short marketing description.
    pub description: String,

    /// List price in cents.
    pub price_cents: i64,

    /// Collection this product belongs to.
    pub category: Category,

    /// Sizes offered.
    pub sizes: Vec<Size>,

    /// Colors offered.
    pub colors: Vec<Color>,

    /// Image references.
    pub images: Vec<String>,

    /// Whether the product is currently purchasable.
    pub in_stock: bool,

    /// Whether the product is featured on the home page.
    pub featured: bool,

    /// Manufacturing footprint in kg CO2 equivalent.
    pub carbon_footprint_kg: f64,

    /// Certificate reference. Private: paired with `is_eco_verified` below.
    carbon_certificate: Option<String>,

    /// Derived from `carbon_certificate` at authoring time. Private so the
    /// pairing cannot be broken outside the authoring path.
    is_eco_verified: bool,

    /// When the product was authored. Drives the default catalog sort.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Authors a new product from a validated draft.
    ///
    /// Assigns a fresh UUID and timestamp, and derives the verification
    /// flag from certificate presence.
    pub fn new(draft: ProductDraft) -> CoreResult<Self> {
        draft.validate()?;
        Ok(Self::assemble(
            Uuid::new_v4().to_string(),
            Utc::now(),
            draft,
        ))
    }

    /// Authors a revision of this product from a validated draft.
    ///
    /// Identity and creation timestamp are preserved; everything else,
    /// including the verification flag, is re-derived from the draft.
    pub fn revised(&self, draft: ProductDraft) -> CoreResult<Self> {
        draft.validate()?;
        Ok(Self::assemble(self.id.clone(), self.created_at, draft))
    }

    fn assemble(id: String, created_at: DateTime<Utc>, draft: ProductDraft) -> Self {
        let is_eco_verified = draft.carbon_certificate.is_some();
        Product {
            id,
            name: draft.name,
            description: draft.description,
            price_cents: draft.price_cents,
            category: draft.category,
            sizes: draft.sizes,
            colors: draft.colors,
            images: draft.images,
            in_stock: draft.in_stock,
            featured: draft.featured,
            carbon_footprint_kg: draft.carbon_footprint_kg,
            carbon_certificate: draft.carbon_certificate,
            is_eco_verified,
            created_at,
        }
    }

    /// Returns the list price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// The certificate reference, if one was provided at authoring time.
    #[inline]
    pub fn carbon_certificate(&self) -> Option<&str> {
        self.carbon_certificate.as_deref()
    }

    /// Whether this product carries a carbon certificate.
    #[inline]
    pub fn is_eco_verified(&self) -> bool {
        self.is_eco_verified
    }

    /// Checks whether the product is offered in the given size.
    pub fn offers_size(&self, size: Size) -> bool {
        self.sizes.contains(&size)
    }

    /// Checks whether the product is offered in the given color.
    pub fn offers_color(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Linen Wrap Dress".to_string(),
            description: "Breathable summer wrap dress".to_string(),
            price_cents: 8999,
            category: Category::Women,
            sizes: vec![Size::S, Size::M, Size::L],
            colors: vec![Color::Navy, Color::Beige],
            images: vec![],
            in_stock: true,
            featured: false,
            carbon_footprint_kg: 6.0,
            carbon_certificate: None,
        }
    }

    #[test]
    fn test_new_without_certificate_is_not_verified() {
        let product = Product::new(draft()).unwrap();
        assert!(!product.is_eco_verified());
        assert!(product.carbon_certificate().is_none());
    }

    #[test]
    fn test_new_with_certificate_is_verified() {
        let mut d = draft();
        d.carbon_certificate = Some("/certificates/linen-wrap.pdf".to_string());

        let product = Product::new(d).unwrap();
        assert!(product.is_eco_verified());
        assert_eq!(
            product.carbon_certificate(),
            Some("/certificates/linen-wrap.pdf")
        );
    }

    #[test]
    fn test_revised_preserves_identity_and_rederives_verification() {
        let original = Product::new(draft()).unwrap();

        let mut d = draft();
        d.carbon_certificate = Some("/certificates/linen-wrap.pdf".to_string());
        let revised = original.revised(d).unwrap();

        assert_eq!(revised.id, original.id);
        assert_eq!(revised.created_at, original.created_at);
        assert!(revised.is_eco_verified());

        // Removing the certificate on a later edit removes verification.
        let reverted = revised.revised(draft()).unwrap();
        assert!(!reverted.is_eco_verified());
    }

    #[test]
    fn test_offers_size_and_color() {
        let product = Product::new(draft()).unwrap();
        assert!(product.offers_size(Size::M));
        assert!(!product.offers_size(Size::Xxl));
        assert!(product.offers_color(Color::Navy));
        assert!(!product.offers_color(Color::Red));
    }

    #[test]
    fn test_size_and_color_labels() {
        assert_eq!(Size::Xs.label(), "XS");
        assert_eq!(Size::Xxl.to_string(), "XXL");
        assert_eq!(Color::Burgundy.label(), "Burgundy");
        assert_eq!(Category::Women.to_string(), "women");
    }

    #[test]
    fn test_size_serde_labels() {
        assert_eq!(serde_json::to_string(&Size::Xl).unwrap(), "\"XL\"");
        assert_eq!(serde_json::to_string(&Color::Emerald).unwrap(), "\"Emerald\"");
        assert_eq!(serde_json::to_string(&Category::Men).unwrap(), "\"men\"");
    }
}
