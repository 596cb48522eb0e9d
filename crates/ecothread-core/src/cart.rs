//! # Cart Module
//!
//! The shopping cart state machine.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Frontend Action          Engine Operation         State Change         │
//! │  ───────────────          ────────────────         ────────────         │
//! │                                                                         │
//! │  Add to Cart ────────────► add_item() ───────────► merge or append     │
//! │                                                                         │
//! │  Change Quantity ────────► update_quantity() ────► absolute set        │
//! │                                                    (<= 0 removes)       │
//! │  Click Remove ───────────► remove_item() ────────► retain others       │
//! │                                                                         │
//! │  Checkout / Clear ───────► clear() ──────────────► lines.clear()       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Line Identity
//! Lines merge on the triple (product id, size, color). Adding the same
//! dress in the same size and color twice yields one line with quantity 2;
//! any change to the triple starts a new line. Display order is insertion
//! order.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Color, Product, Size};
use crate::{MAX_CART_LINES, MAX_LINE_QUANTITY, STANDARD_TAX_RATE_BPS};

// =============================================================================
// Line Key
// =============================================================================

/// The merge identity of a cart line: (product id, size, color).
///
/// Rendered as `"{id}-{size}-{color}"`, which is also the row id the
/// frontend uses for its quantity and remove controls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineKey {
    pub product_id: String,
    pub size: Size,
    pub color: Color,
}

impl LineKey {
    pub fn new(product_id: impl Into<String>, size: Size, color: Color) -> Self {
        LineKey {
            product_id: product_id.into(),
            size,
            color,
        }
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.product_id, self.size, self.color)
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One line in the cart.
///
/// ## Snapshot Semantics
/// The line owns a frozen copy of the product as it existed when added.
/// Catalog edits after that moment never reach an open cart: the shopper
/// pays the price they saw.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product snapshot taken at add time.
    pub product: Product,

    /// Selected size. Guaranteed to be one the product offers.
    pub size: Size,

    /// Selected color. Guaranteed to be one the product offers.
    pub color: Color,

    /// Always positive; a quantity reaching zero removes the line.
    pub quantity: i64,

    /// When this line was first added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// The merge identity of this line.
    pub fn key(&self) -> LineKey {
        LineKey::new(self.product.id.clone(), self.size, self.color)
    }

    /// List-price line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }

    /// Carbon contribution of this line (footprint × quantity).
    pub fn footprint_kg(&self) -> f64 {
        self.product.carbon_footprint_kg * self.quantity as f64
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by (product id, size, color)
/// - Every line quantity is in `1..=MAX_LINE_QUANTITY`
/// - At most `MAX_CART_LINES` distinct lines
/// - Line order is insertion order
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,

    /// When the cart was created or last cleared.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// The cart lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Adds one unit of a product in the given size and color.
    ///
    /// ## Behavior
    /// - Rejects `InvalidSelection` if the product does not offer the size
    ///   or color (the UI filters these, the engine does not trust it)
    /// - If a line with the same (product id, size, color) exists, its
    ///   quantity increases by one
    /// - Otherwise a new quantity-1 line is appended at the end
    pub fn add_item(&mut self, product: &Product, size: Size, color: Color) -> CoreResult<()> {
        if !product.offers_size(size) {
            return Err(CoreError::InvalidSelection {
                product: product.name.clone(),
                field: "size",
                value: size.to_string(),
            });
        }

        if !product.offers_color(color) {
            return Err(CoreError::InvalidSelection {
                product: product.name.clone(),
                field: "color",
                value: color.to_string(),
            });
        }

        let key = LineKey::new(product.id.clone(), size, color);
        if let Some(line) = self.lines.iter_mut().find(|l| l.key() == key) {
            if line.quantity + 1 > MAX_LINE_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: line.quantity + 1,
                    max: MAX_LINE_QUANTITY,
                });
            }
            line.quantity += 1;
            return Ok(());
        }

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }

        self.lines.push(CartLine {
            product: product.clone(),
            size,
            color,
            quantity: 1,
            added_at: Utc::now(),
        });
        Ok(())
    }

    /// Sets a line's quantity to an absolute value.
    ///
    /// ## Behavior
    /// - Unknown key: `LineNotFound` (the original silently no-opped;
    ///   reporting is the documented deviation)
    /// - `quantity <= 0`: removes the line, same result as `remove_item`
    /// - Otherwise: absolute set, capped at `MAX_LINE_QUANTITY`
    pub fn update_quantity(&mut self, key: &LineKey, quantity: i64) -> CoreResult<()> {
        let index = self
            .lines
            .iter()
            .position(|l| &l.key() == key)
            .ok_or_else(|| CoreError::LineNotFound(key.to_string()))?;

        if quantity <= 0 {
            self.lines.remove(index);
            return Ok(());
        }

        if quantity > MAX_LINE_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_LINE_QUANTITY,
            });
        }

        self.lines[index].quantity = quantity;
        Ok(())
    }

    /// Removes the line with the given key.
    ///
    /// No-op if absent; returns whether a line was removed.
    pub fn remove_item(&mut self, key: &LineKey) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|l| &l.key() != key);
        self.lines.len() != initial_len
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Returns the number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Subtotal: sum of list-price line totals.
    pub fn subtotal(&self) -> Money {
        self.lines
            .iter()
            .map(|l| l.line_total())
            .fold(Money::zero(), |acc, t| acc + t)
    }

    /// Tax at the flat 10% rate.
    pub fn tax(&self) -> Money {
        self.subtotal().percentage(STANDARD_TAX_RATE_BPS)
    }

    /// Grand total: subtotal plus tax.
    pub fn grand_total(&self) -> Money {
        self.subtotal() + self.tax()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Cart Totals DTO
// =============================================================================

/// Order summary figures for the cart page and the header badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub subtotal: Money,
    pub tax: Money,
    pub grand_total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            subtotal: cart.subtotal(),
            tax: cart.tax(),
            grand_total: cart.grand_total(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
