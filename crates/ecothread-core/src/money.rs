//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  The original storefront kept prices as JS numbers and formatted with   │
//! │  toFixed(2), which silently hides drift. We keep integer cents instead: │
//! │    an 8% eco discount on $100.00 is exactly 800 cents, every time.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Percentages (tax, eco discount, cashback) are expressed in basis points
//! (1 bps = 0.01%) and applied with explicit rounding, so totals are
//! reproducible to the cent.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: allows negative values for discounts and savings
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
///
/// Every monetary value in the system flows through this type:
/// product prices, line totals, discounts, tax, cashback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use ecothread_core::money::Money;
    ///
    /// let price = Money::from_cents(8999); // $89.99
    /// assert_eq!(price.cents(), 8999);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// For negative amounts, only the major unit should be negative:
    /// `from_major_minor(-5, 50)` is -$5.50, not -$4.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity (line totals).
    ///
    /// ## Example
    /// ```rust
    /// use ecothread_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(5000); // $50.00
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 10000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Returns the rounded share of this amount at `bps` basis points.
    ///
    /// Used for tax (1000 bps = 10%), eco discount amounts, and the 5%
    /// verified-item cashback (500 bps).
    ///
    /// ## Implementation
    /// Integer math with half-up rounding: `(amount * bps + 5000) / 10000`.
    /// Uses i128 intermediates to prevent overflow on large carts.
    ///
    /// ## Example
    /// ```rust
    /// use ecothread_core::money::Money;
    ///
    /// let subtotal = Money::from_cents(13000); // $130.00
    /// let tax = subtotal.percentage(1000);     // 10%
    /// assert_eq!(tax.cents(), 1300);           // $13.00
    /// ```
    pub fn percentage(&self, bps: u32) -> Money {
        let share = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money::from_cents(share as i64)
    }

    /// Returns this amount minus its rounded share at `bps` basis points.
    ///
    /// ## Example
    /// ```rust
    /// use ecothread_core::money::Money;
    ///
    /// let price = Money::from_cents(10000);         // $100.00
    /// assert_eq!(price.less_percentage(800).cents(), 9200); // 8% eco discount
    /// ```
    pub fn less_percentage(&self, bps: u32) -> Money {
        *self - self.percentage(bps)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// For debugging only. The frontend formats for actual display to
/// handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Percent
// =============================================================================

/// A whole-number percentage in `[0, 100]`.
///
/// The eco discount is always displayed as a whole percent ("8% ECO
/// DISCOUNT"), so the type stores whole percents and converts to basis
/// points only when applied to money.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS, Default,
)]
#[ts(export)]
pub struct Percent(u32);

impl Percent {
    /// Zero percent.
    #[inline]
    pub const fn zero() -> Self {
        Percent(0)
    }

    /// Creates a percent clamped into `[0, 100]`.
    ///
    /// The eco discount formula can in principle exceed 100 for a
    /// pathological footprint gap; clamping keeps final prices non-negative.
    pub fn clamped(value: i64) -> Self {
        Percent(value.clamp(0, 100) as u32)
    }

    /// Returns the whole-percent value.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns the percentage in basis points (8% -> 800).
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0 * 100
    }

    /// Checks if the percentage is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(8999);
        assert_eq!(money.cents(), 8999);
        assert_eq!(money.dollars(), 89);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(8999)), "$89.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
    }

    #[test]
    fn test_percentage_flat_tax() {
        // $130.00 at 10% = $13.00, exact
        let subtotal = Money::from_cents(13000);
        assert_eq!(subtotal.percentage(1000).cents(), 1300);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        // $10.05 at 10% = $1.005 -> $1.01
        let amount = Money::from_cents(1005);
        assert_eq!(amount.percentage(1000).cents(), 101);
    }

    #[test]
    fn test_less_percentage() {
        // 8% eco discount on $100.00 -> $92.00
        let price = Money::from_cents(10000);
        assert_eq!(price.less_percentage(800).cents(), 9200);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(3000);
        assert_eq!(unit_price.multiply_quantity(3).cents(), 9000);
    }

    #[test]
    fn test_percent_clamped() {
        assert_eq!(Percent::clamped(-3).value(), 0);
        assert_eq!(Percent::clamped(8).value(), 8);
        assert_eq!(Percent::clamped(250).value(), 100);
    }

    #[test]
    fn test_percent_bps() {
        assert_eq!(Percent::clamped(8).bps(), 800);
        assert!(Percent::zero().is_zero());
        assert_eq!(format!("{}", Percent::clamped(12)), "12%");
    }
}
