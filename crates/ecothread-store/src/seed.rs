//! # Seed Catalog
//!
//! Deterministic sample catalog for development and demos: the mock
//! dataset the storefront pages render before a real backend exists.
//!
//! The data is an embedded JSON document of authoring drafts. Every
//! product goes through the normal authoring path ([`Catalog::insert`]),
//! so ids and timestamps are assigned and verification is derived from
//! certificate presence exactly as it would be for an admin submission.
//!
//! The footprints straddle the catalog average on purpose: some products
//! earn an eco discount, some do not, and both certified and estimated
//! records appear in each collection.

use crate::catalog::Catalog;
use crate::error::StoreResult;
use ecothread_core::ProductDraft;

/// Embedded sample drafts. Kept as JSON so the set reads like the fixture
/// data it replaces and can be tweaked without touching code.
const SEED_DRAFTS: &str = r#"[
  {
    "name": "Elegant Evening Gown",
    "description": "Floor-length chiffon gown with a fitted bodice",
    "priceCents": 18999,
    "category": "women",
    "sizes": ["XS", "S", "M", "L"],
    "colors": ["Black", "Navy", "Burgundy"],
    "images": ["/images/elegant-evening-gown.jpg"],
    "inStock": true,
    "featured": true,
    "carbonFootprintKg": 5.2,
    "carbonCertificate": "/certificates/elegant-evening-gown.pdf"
  },
  {
    "name": "Linen Wrap Dress",
    "description": "Breathable summer wrap dress in washed linen",
    "priceCents": 8999,
    "category": "women",
    "sizes": ["S", "M", "L", "XL"],
    "colors": ["Beige", "White", "Green"],
    "images": ["/images/linen-wrap-dress.jpg"],
    "inStock": true,
    "featured": true,
    "carbonFootprintKg": 3.8,
    "carbonCertificate": "/certificates/linen-wrap-dress.pdf"
  },
  {
    "name": "Silk Slip Dress",
    "description": "Bias-cut slip dress in mulberry silk",
    "priceCents": 12999,
    "category": "women",
    "sizes": ["XS", "S", "M"],
    "colors": ["Gold", "Emerald", "Black"],
    "images": ["/images/silk-slip-dress.jpg"],
    "inStock": true,
    "featured": false,
    "carbonFootprintKg": 9.4,
    "carbonCertificate": null
  },
  {
    "name": "Knit Midi Dress",
    "description": "Ribbed knit midi with long sleeves",
    "priceCents": 7499,
    "category": "women",
    "sizes": ["S", "M", "L", "XL", "XXL"],
    "colors": ["Gray", "Burgundy", "Navy"],
    "images": ["/images/knit-midi-dress.jpg"],
    "inStock": true,
    "featured": false,
    "carbonFootprintKg": 12.6,
    "carbonCertificate": null
  },
  {
    "name": "Floral Tea Dress",
    "description": "Vintage-cut tea dress in printed viscose",
    "priceCents": 6499,
    "category": "women",
    "sizes": ["XS", "S", "M", "L", "XL"],
    "colors": ["Red", "Blue", "White"],
    "images": ["/images/floral-tea-dress.jpg"],
    "inStock": false,
    "featured": false,
    "carbonFootprintKg": 7.1,
    "carbonCertificate": "/certificates/floral-tea-dress.pdf"
  },
  {
    "name": "Classic Tuxedo Set",
    "description": "Two-piece tuxedo with satin lapels",
    "priceCents": 29999,
    "category": "men",
    "sizes": ["M", "L", "XL", "XXL"],
    "colors": ["Black", "Navy"],
    "images": ["/images/classic-tuxedo-set.jpg"],
    "inStock": true,
    "featured": true,
    "carbonFootprintKg": 16.8,
    "carbonCertificate": null
  },
  {
    "name": "Tailored Linen Suit",
    "description": "Unstructured summer suit in European flax",
    "priceCents": 21999,
    "category": "men",
    "sizes": ["S", "M", "L", "XL"],
    "colors": ["Beige", "Gray", "White"],
    "images": ["/images/tailored-linen-suit.jpg"],
    "inStock": true,
    "featured": false,
    "carbonFootprintKg": 6.9,
    "carbonCertificate": "/certificates/tailored-linen-suit.pdf"
  },
  {
    "name": "Casual Oxford Shirt Dress",
    "description": "Relaxed longline oxford in organic cotton",
    "priceCents": 5999,
    "category": "men",
    "sizes": ["S", "M", "L", "XL", "XXL"],
    "colors": ["White", "Blue", "Gray"],
    "images": ["/images/casual-oxford-shirt-dress.jpg"],
    "inStock": true,
    "featured": false,
    "carbonFootprintKg": 4.5,
    "carbonCertificate": "/certificates/casual-oxford-shirt-dress.pdf"
  },
  {
    "name": "Wool Overcoat",
    "description": "Heavyweight winter overcoat in merino wool",
    "priceCents": 24999,
    "category": "men",
    "sizes": ["M", "L", "XL"],
    "colors": ["Gray", "Black", "Navy"],
    "images": ["/images/wool-overcoat.jpg"],
    "inStock": true,
    "featured": false,
    "carbonFootprintKg": 18.2,
    "carbonCertificate": null
  },
  {
    "name": "Festival Kaftan",
    "description": "Flowing printed kaftan in recycled polyester",
    "priceCents": 4999,
    "category": "men",
    "sizes": ["M", "L", "XL"],
    "colors": ["Emerald", "Gold", "Red"],
    "images": ["/images/festival-kaftan.jpg"],
    "inStock": true,
    "featured": false,
    "carbonFootprintKg": 8.3,
    "carbonCertificate": null
  }
]"#;

/// Builds the sample catalog.
pub fn sample_catalog() -> StoreResult<Catalog> {
    let drafts: Vec<ProductDraft> = serde_json::from_str(SEED_DRAFTS)?;
    Catalog::from_drafts(drafts)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ecothread_core::Category;

    #[test]
    fn test_seed_parses_and_loads() {
        let catalog = sample_catalog().unwrap();
        assert_eq!(catalog.len(), 10);
    }

    #[test]
    fn test_seed_covers_both_collections() {
        let catalog = sample_catalog().unwrap();
        assert_eq!(catalog.by_category(Category::Women).len(), 5);
        assert_eq!(catalog.by_category(Category::Men).len(), 5);
        assert_eq!(catalog.featured().len(), 3);
    }

    #[test]
    fn test_seed_verification_derived_from_certificates() {
        let catalog = sample_catalog().unwrap();
        assert_eq!(catalog.certified_count(), 5);
        assert_eq!(catalog.estimated_count(), 5);
        for product in catalog.verified() {
            assert!(product.carbon_certificate().is_some());
        }
    }

    #[test]
    fn test_seed_footprints_straddle_average() {
        let catalog = sample_catalog().unwrap();
        let avg = catalog.average_carbon_footprint();
        let below = catalog.eco_friendly().len();

        assert!(below > 0);
        assert!(below < catalog.len());
        assert!(avg > 0.0);
    }
}
