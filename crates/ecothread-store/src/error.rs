//! # Store Error Types
//!
//! Errors raised by the catalog and session layer. Core errors pass
//! through unchanged so the frontend sees the original message.

use ecothread_core::CoreError;
use thiserror::Error;

/// Store layer errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No product with the given id exists in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Checkout was requested on an empty cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// Embedded seed data failed to parse.
    #[error("Seed data error: {0}")]
    Seed(#[from] serde_json::Error),

    /// A core business rule was violated (wraps CoreError).
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
