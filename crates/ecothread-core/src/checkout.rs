//! # Checkout Summary Module
//!
//! The environmental and rewards summary shown on the order-confirmed
//! screen.
//!
//! ## Computation Moment
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Flow                                        │
//! │                                                                         │
//! │  Cart (pre-clear) ──► CheckoutSummary::compute() ──► summary snapshot  │
//! │         │                                                               │
//! │         └──────────── cart.clear() ◄── only after the snapshot          │
//! │                                                                         │
//! │  The summary is a pure function of (cart, catalog average): calling     │
//! │  it twice on an unmutated cart returns identical values.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! "Saved" carbon is measured against a counterfactual order of the same
//! quantity at the catalog-average footprint, so an above-average basket
//! shows a negative saving and lands in the Standard tier.

use serde::Serialize;
use ts_rs::TS;

use crate::cart::Cart;
use crate::money::Money;
use crate::pricing::{is_low_carbon, CASHBACK_RATE_BPS};

// =============================================================================
// Impact Tier
// =============================================================================

/// Qualitative tier for the carbon saved by an order, in kg CO2e.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ImpactTier {
    /// More than 5 kg saved.
    Excellent,
    /// More than 2 kg saved.
    Great,
    /// Any positive saving.
    Good,
    /// No saving (at or above the catalog average).
    Standard,
}

impl ImpactTier {
    /// Derives the tier from kg of carbon saved.
    pub fn from_carbon_saved(saved_kg: f64) -> Self {
        if saved_kg > 5.0 {
            ImpactTier::Excellent
        } else if saved_kg > 2.0 {
            ImpactTier::Great
        } else if saved_kg > 0.0 {
            ImpactTier::Good
        } else {
            ImpactTier::Standard
        }
    }

    /// Display label for the confirmation badge.
    pub const fn label(&self) -> &'static str {
        match self {
            ImpactTier::Excellent => "Excellent",
            ImpactTier::Great => "Great",
            ImpactTier::Good => "Good",
            ImpactTier::Standard => "Standard",
        }
    }
}

// =============================================================================
// Checkout Summary
// =============================================================================

/// Everything the order-confirmed popup renders, computed once from the
/// pre-clear cart.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    /// Total units across all lines.
    pub total_quantity: i64,

    /// Actual order footprint: Σ footprint × quantity.
    pub total_footprint_kg: f64,

    /// Counterfactual footprint: catalog average × total quantity.
    pub average_if_bought_kg: f64,

    /// `average_if_bought_kg − total_footprint_kg`. Negative when the
    /// order is above average.
    pub carbon_saved_kg: f64,

    /// Saving as a percentage of the counterfactual. Defined as 0 for an
    /// empty order or a zero counterfactual.
    pub carbon_saved_percent: f64,

    /// Qualitative tier derived from `carbon_saved_kg`.
    pub impact: ImpactTier,

    /// Lines whose product footprint is strictly below the catalog average.
    pub eco_friendly_lines: usize,

    /// Lines whose product carries a carbon certificate.
    pub verified_lines: usize,

    /// 5% cashback on the list-price total of verified lines.
    pub cashback: Money,

    /// Order subtotal (list prices).
    pub subtotal: Money,

    /// Flat 10% tax.
    pub tax: Money,

    /// Subtotal plus tax.
    pub grand_total: Money,
}

impl CheckoutSummary {
    /// Computes the summary for a cart against the catalog average
    /// footprint.
    ///
    /// Pure and read-only: the caller clears the cart afterwards. An empty
    /// cart should not reach checkout, but if it does every figure is zero
    /// rather than NaN.
    pub fn compute(cart: &Cart, average_kg: f64) -> Self {
        let total_quantity = cart.total_quantity();
        let total_footprint_kg: f64 = cart.lines().iter().map(|l| l.footprint_kg()).sum();
        let average_if_bought_kg = average_kg * total_quantity as f64;
        let carbon_saved_kg = average_if_bought_kg - total_footprint_kg;

        // Divide-by-zero guard: empty order or zero-average catalog
        let carbon_saved_percent = if total_quantity == 0 || average_if_bought_kg <= 0.0 {
            0.0
        } else {
            carbon_saved_kg / average_if_bought_kg * 100.0
        };

        let eco_friendly_lines = cart
            .lines()
            .iter()
            .filter(|l| is_low_carbon(l.product.carbon_footprint_kg, average_kg))
            .count();

        let verified_lines = cart
            .lines()
            .iter()
            .filter(|l| l.product.is_eco_verified())
            .count();

        let verified_total = cart
            .lines()
            .iter()
            .filter(|l| l.product.is_eco_verified())
            .map(|l| l.line_total())
            .fold(Money::zero(), |acc, t| acc + t);

        CheckoutSummary {
            total_quantity,
            total_footprint_kg,
            average_if_bought_kg,
            carbon_saved_kg,
            carbon_saved_percent,
            impact: ImpactTier::from_carbon_saved(carbon_saved_kg),
            eco_friendly_lines,
            verified_lines,
            cashback: verified_total.percentage(CASHBACK_RATE_BPS),
            subtotal: cart.subtotal(),
            tax: cart.tax(),
            grand_total: cart.grand_total(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
