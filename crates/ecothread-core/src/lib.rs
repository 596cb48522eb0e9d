//! # ecothread-core: Pure Business Logic for the EcoThread Storefront
//!
//! This crate is the **heart** of EcoThread. It contains the cart state
//! machine and the eco-pricing rules as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      EcoThread Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Frontend (TypeScript storefront)               │   │
//! │  │   Product cards ──► Detail page ──► Cart page ──► Confirmation  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ generated TS types                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    ecothread-store                              │   │
//! │  │     Catalog (in-memory) • CartSession • checkout orchestration  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ ecothread-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  pricing  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │ EcoPrice  │  │   │
//! │  │   │ Size/Color│  │  Percent  │  │ CartLine  │  │ discounts │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │         ┌───────────┐  ┌───────────┐  ┌────────────┐          │   │
//! │  │         │   error   │  │ validation│  │  checkout  │          │   │
//! │  │         └───────────┘  └───────────┘  └────────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, Size, Color)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Eco discount and catalog-average functions
//! - [`cart`] - Cart state machine and totals
//! - [`checkout`] - Environmental summary and cashback at checkout
//! - [`error`] - Domain error types
//! - [`validation`] - Product authoring validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every function is deterministic - same input,
//!    same output
//! 2. **No I/O**: database, network and file system access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are in cents (i64)
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use ecothread_core::money::Money;
//! use ecothread_core::pricing::discount_percent;
//!
//! // A dress 4 kg below a 10 kg catalog average earns 8% off
//! let percent = discount_percent(6.0, 10.0);
//! assert_eq!(percent.value(), 8);
//!
//! let price = Money::from_cents(10000); // $100.00
//! assert_eq!(price.less_percentage(percent.bps()).cents(), 9200);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use ecothread_core::Cart` instead of
// `use ecothread_core::cart::Cart`

pub use cart::{Cart, CartLine, CartTotals, LineKey};
pub use checkout::{CheckoutSummary, ImpactTier};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, Percent};
pub use pricing::EcoPrice;
pub use types::{Category, Color, Product, ProductDraft, Size};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat sales tax applied to every order, in basis points (10%).
///
/// ## Why a constant?
/// The storefront charges one jurisdiction-independent rate. If that ever
/// becomes configurable it will move into catalog/tenant configuration;
/// until then a constant keeps every total reproducible.
pub const STANDARD_TAX_RATE_BPS: u32 = 1000;

/// Maximum distinct lines allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and keeps the cart page renderable.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single line in the cart.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 999;
