//! # ecothread-store: Catalog and Session State for EcoThread
//!
//! The stateful layer the storefront UI talks to. Wraps the pure engine
//! in `ecothread-core` with:
//!
//! - [`catalog`] - the in-memory product catalog (reference reads, admin
//!   CRUD, merchandising queries, sorting and certified-first grouping)
//! - [`seed`] - the embedded sample catalog for development and demos
//! - [`session`] - the per-session cart state cell and checkout
//! - [`error`] - store-level error types
//!
//! ## Ownership Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   Catalog (shared reference data)      CartSession (one per shopper)   │
//! │        │                                     │                          │
//! │        │  get(id) at add time                │  Arc<Mutex<Cart>>        │
//! │        └────────────► snapshot ──────────────┘  single writer           │
//! │                                                                         │
//! │   Cart lines never re-read the catalog after add: price and footprint  │
//! │   are frozen per line. Only the catalog-average footprint is read      │
//! │   fresh (at quote and checkout time).                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use ecothread_store::{sample_catalog, CartSession};
//! use ecothread_core::{Color, Size};
//!
//! let catalog = sample_catalog().unwrap();
//! let session = CartSession::new();
//!
//! let id = catalog.list()[0].id.clone();
//! session.add_item(&catalog, &id, Size::M, Color::Black).unwrap();
//!
//! let summary = session.checkout(&catalog).unwrap();
//! assert_eq!(summary.total_quantity, 1);
//! assert!(session.is_empty());
//! ```

pub mod catalog;
pub mod error;
pub mod seed;
pub mod session;

pub use catalog::{organized, sorted, Catalog, SortOption};
pub use error::{StoreError, StoreResult};
pub use seed::sample_catalog;
pub use session::CartSession;
