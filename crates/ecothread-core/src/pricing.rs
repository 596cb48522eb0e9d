//! # Eco Pricing Module
//!
//! The eco-discount rules that drive the storefront's merchandising.
//!
//! ## How the Discount Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Eco Discount Pipeline                                │
//! │                                                                         │
//! │  catalog footprints ──► average_carbon_footprint()                      │
//! │                                │                                        │
//! │  product.footprint ────────────┤                                        │
//! │                                ▼                                        │
//! │          low carbon?  footprint < average (strict)                      │
//! │                                │                                        │
//! │                                ▼                                        │
//! │          percent = round((average − footprint) × 2), clamped [0,100]    │
//! │                                │                                        │
//! │                                ▼                                        │
//! │          EcoPrice { discount amount, final price }                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The reference point is catalog-relative, not absolute: a product is
//! "low carbon" only compared to the current average across all products.
//! There is no stored discounted price anywhere; every surface (card,
//! detail page, cart label) recomputes from the same formula so they can
//! never disagree.

use serde::Serialize;
use ts_rs::TS;

use crate::money::{Money, Percent};
use crate::types::Product;

/// Cashback rate on eco-verified line totals, in basis points (5%).
pub const CASHBACK_RATE_BPS: u32 = 500;

// =============================================================================
// Catalog Aggregate
// =============================================================================

/// Arithmetic mean carbon footprint across a catalog.
///
/// Recomputed from the catalog on every read; never cached.
///
/// ## Empty Catalog
/// Defined as 0.0 rather than NaN. Footprints are non-negative, so with an
/// average of 0 the strict `<` comparison classifies every product as not
/// low-carbon, which is the behavior we want for a degenerate catalog.
pub fn average_carbon_footprint<I>(footprints: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut count = 0u32;
    for fp in footprints {
        sum += fp;
        count += 1;
    }

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

// =============================================================================
// Discount Functions
// =============================================================================

/// Whether a footprint qualifies as low-carbon against the catalog average.
///
/// Strict comparison: a product exactly at the average is not low-carbon
/// and earns no discount.
#[inline]
pub fn is_low_carbon(footprint_kg: f64, average_kg: f64) -> bool {
    footprint_kg < average_kg
}

/// The eco discount percent for a footprint against the catalog average.
///
/// `round((average − footprint) × 2)`, clamped into `[0, 100]`. Zero for
/// anything at or above the average.
///
/// ## Example
/// ```rust
/// use ecothread_core::pricing::discount_percent;
///
/// // 4 kg below a 10 kg average: 8% off
/// assert_eq!(discount_percent(6.0, 10.0).value(), 8);
/// ```
pub fn discount_percent(footprint_kg: f64, average_kg: f64) -> Percent {
    if !is_low_carbon(footprint_kg, average_kg) {
        return Percent::zero();
    }

    Percent::clamped(((average_kg - footprint_kg) * 2.0).round() as i64)
}

// =============================================================================
// Eco Price Quote
// =============================================================================

/// A fully computed price display for one product.
///
/// This is what a product card or detail page renders: the list price, the
/// eco badge percent, the dollar saving, and the final price. Serialized to
/// the frontend as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EcoPrice {
    /// The undiscounted list price.
    pub list_price: Money,

    /// Whole-percent eco discount (0 when not low-carbon).
    pub discount_percent: Percent,

    /// Dollar amount saved (`list_price × percent / 100`, rounded cents).
    pub discount_amount: Money,

    /// `list_price − discount_amount`.
    pub final_price: Money,

    /// Whether the product sits strictly below the catalog average.
    pub low_carbon: bool,
}

impl EcoPrice {
    /// Quotes a product against the catalog average footprint.
    pub fn quote(product: &Product, average_kg: f64) -> Self {
        let list_price = product.price();
        let low_carbon = is_low_carbon(product.carbon_footprint_kg, average_kg);
        let percent = discount_percent(product.carbon_footprint_kg, average_kg);
        let discount_amount = list_price.percentage(percent.bps());

        EcoPrice {
            list_price,
            discount_percent: percent,
            discount_amount,
            final_price: list_price - discount_amount,
            low_carbon,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Color, ProductDraft, Size};

    fn product(price_cents: i64, footprint_kg: f64) -> Product {
        Product::new(ProductDraft {
            name: "Test Dress".to_string(),
            description: String::new(),
            price_cents,
            category: Category::Women,
            sizes: vec![Size::M],
            colors: vec![Color::Black],
            images: vec![],
            in_stock: true,
            featured: false,
            carbon_footprint_kg: footprint_kg,
            carbon_certificate: None,
        })
        .unwrap()
    }

    #[test]
    fn test_average_carbon_footprint() {
        let avg = average_carbon_footprint([6.0, 10.0, 14.0]);
        assert!((avg - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_empty_catalog_is_zero() {
        assert_eq!(average_carbon_footprint(std::iter::empty()), 0.0);
        // And nothing qualifies as low-carbon against it
        assert!(!is_low_carbon(0.0, 0.0));
        assert!(!is_low_carbon(3.5, 0.0));
    }

    #[test]
    fn test_discount_worked_example() {
        // Spec-level example: average 10.0 kg, footprint 6.0 kg, price $100
        // percent = round((10 − 6) × 2) = 8
        let p = product(10000, 6.0);
        let quote = EcoPrice::quote(&p, 10.0);

        assert!(quote.low_carbon);
        assert_eq!(quote.discount_percent.value(), 8);
        assert_eq!(quote.discount_amount.cents(), 800); // $8.00
        assert_eq!(quote.final_price.cents(), 9200); // $92.00
    }

    #[test]
    fn test_no_discount_at_exact_average() {
        let p = product(10000, 10.0);
        let quote = EcoPrice::quote(&p, 10.0);

        assert!(!quote.low_carbon);
        assert!(quote.discount_percent.is_zero());
        assert_eq!(quote.final_price, quote.list_price);
    }

    #[test]
    fn test_no_discount_above_average() {
        let quote = EcoPrice::quote(&product(10000, 14.0), 10.0);
        assert!(!quote.low_carbon);
        assert!(quote.discount_amount.is_zero());
    }

    #[test]
    fn test_discount_monotonic_in_footprint() {
        // Equal prices: the lower footprint never gets a smaller percent
        let avg = 10.0;
        let lower = discount_percent(3.0, avg);
        let higher = discount_percent(7.0, avg);
        assert!(lower.value() >= higher.value());
        assert_eq!(lower.value(), 14);
        assert_eq!(higher.value(), 6);
    }

    #[test]
    fn test_discount_clamped_at_100() {
        // Pathological gap: (80 − 0) × 2 = 160, clamped to 100
        let p = product(10000, 0.0);
        let quote = EcoPrice::quote(&p, 80.0);

        assert_eq!(quote.discount_percent.value(), 100);
        assert_eq!(quote.final_price.cents(), 0);
        assert!(!quote.final_price.is_negative());
    }

    #[test]
    fn test_discount_rounds_to_nearest_percent() {
        // (10.0 − 8.8) × 2 = 2.4 -> 2%; (10.0 − 8.7) × 2 = 2.6 -> 3%
        assert_eq!(discount_percent(8.8, 10.0).value(), 2);
        assert_eq!(discount_percent(8.7, 10.0).value(), 3);
    }
}
