//! # Error Types
//!
//! Domain-specific error types for ecothread-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ecothread-core errors (this file)                                     │
//! │  ├── CoreError        - Cart and pricing domain errors                 │
//! │  └── ValidationError  - Authoring input validation failures            │
//! │                                                                         │
//! │  ecothread-store errors (separate crate)                               │
//! │  └── StoreError       - Catalog lookup / session failures              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → Frontend             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, key, limits)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart and pricing domain errors.
///
/// These represent business rule violations. The original storefront relied
/// on the UI to pre-filter bad input and silently ignored the rest; the
/// engine here validates defensively and reports instead.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A size or color was requested that the product does not offer.
    ///
    /// ## When This Occurs
    /// - Add-to-cart with a size missing from `product.sizes`
    /// - Add-to-cart with a color missing from `product.colors`
    ///
    /// The UI disables unavailable options, so reaching this is a caller
    /// bug, but the engine refuses rather than trusting upstream.
    #[error("{product} is not offered in {field} {value}")]
    InvalidSelection {
        product: String,
        field: &'static str,
        value: String,
    },

    /// A quantity update referenced a line that is not in the cart.
    ///
    /// The original silently no-opped here; we report instead so a stale
    /// UI row is noticed. Removal of an absent line stays a no-op.
    #[error("No cart line with key {0}")]
    LineNotFound(String),

    /// Line quantity exceeds the maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Cart has exceeded the maximum number of distinct lines.
    #[error("Cart cannot have more than {max} lines")]
    CartTooLarge { max: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Authoring input validation errors.
///
/// Raised by the product authoring path before a draft becomes a catalog
/// record.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    /// Floating-point value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    /// A collection field needs at least one entry.
    #[error("{field} must have at least one entry")]
    Empty { field: &'static str },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
