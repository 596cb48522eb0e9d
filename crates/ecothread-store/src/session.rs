//! # Cart Session
//!
//! The per-session cart state cell and checkout orchestration.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>`: the engine contract is
//! single-session single-writer, and the mutex is what hands that
//! guarantee to a caller that dispatches UI events from more than one
//! thread. In a multi-session server each session gets its own
//! `CartSession`; carts are never shared between shoppers.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Session Operations                              │
//! │                                                                         │
//! │  UI Action                Session Call             Effect               │
//! │  ─────────                ────────────             ──────               │
//! │  Add to Cart ───────────► add_item(catalog, id) ─► lookup + snapshot   │
//! │  Change Quantity ───────► update_quantity() ─────► absolute set        │
//! │  Click Remove ──────────► remove_item() ─────────► drop line           │
//! │  Place Order ───────────► checkout(catalog) ─────► summary, then clear │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use ecothread_core::{Cart, CartTotals, CheckoutSummary, Color, LineKey, Size};

use crate::catalog::Catalog;
use crate::error::{StoreError, StoreResult};

/// Session-scoped cart state.
///
/// Cloning the session clones the handle, not the cart: all clones share
/// one state cell.
#[derive(Debug, Clone)]
pub struct CartSession {
    cart: Arc<Mutex<Cart>>,
}

impl CartSession {
    /// Creates a session with an empty cart.
    pub fn new() -> Self {
        CartSession {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }

    /// Adds one unit of a catalog product in the given size and color.
    ///
    /// The product is looked up at this moment and snapshotted into the
    /// line; later catalog edits do not reach the cart.
    pub fn add_item(
        &self,
        catalog: &Catalog,
        product_id: &str,
        size: Size,
        color: Color,
    ) -> StoreResult<()> {
        let product = catalog
            .get(product_id)
            .ok_or_else(|| StoreError::ProductNotFound(product_id.to_string()))?;

        debug!(product = %product.name, %size, %color, "add to cart");
        self.with_cart_mut(|cart| cart.add_item(product, size, color))?;
        Ok(())
    }

    /// Sets a line's quantity; zero or below removes the line.
    pub fn update_quantity(&self, key: &LineKey, quantity: i64) -> StoreResult<()> {
        debug!(%key, quantity, "update quantity");
        self.with_cart_mut(|cart| cart.update_quantity(key, quantity))?;
        Ok(())
    }

    /// Removes a line; no-op if absent. Returns whether a line was removed.
    pub fn remove_item(&self, key: &LineKey) -> bool {
        debug!(%key, "remove from cart");
        self.with_cart_mut(|cart| cart.remove_item(key))
    }

    /// Empties the cart without checking out.
    pub fn clear(&self) {
        debug!("clear cart");
        self.with_cart_mut(|cart| cart.clear());
    }

    /// Current order summary figures.
    pub fn totals(&self) -> CartTotals {
        self.with_cart(|cart| CartTotals::from(cart))
    }

    /// A point-in-time copy of the cart for rendering.
    pub fn snapshot(&self) -> Cart {
        self.with_cart(|cart| cart.clone())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.with_cart(|cart| cart.is_empty())
    }

    /// Completes checkout: computes the environmental summary from the
    /// pre-clear cart, then clears it.
    ///
    /// An empty cart is rejected rather than producing an all-zero order
    /// confirmation.
    pub fn checkout(&self, catalog: &Catalog) -> StoreResult<CheckoutSummary> {
        let average = catalog.average_carbon_footprint();

        self.with_cart_mut(|cart| {
            if cart.is_empty() {
                return Err(StoreError::EmptyCart);
            }

            let summary = CheckoutSummary::compute(cart, average);
            cart.clear();

            info!(
                quantity = summary.total_quantity,
                saved_kg = summary.carbon_saved_kg,
                tier = summary.impact.label(),
                cashback = %summary.cashback,
                "checkout completed"
            );
            Ok(summary)
        })
    }
}

impl Default for CartSession {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_catalog;
    use ecothread_core::ImpactTier;

    fn find_id(catalog: &Catalog, name: &str) -> String {
        catalog
            .list()
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.id.clone())
            .unwrap()
    }

    #[test]
    fn test_add_item_snapshots_catalog_product() {
        let catalog = sample_catalog().unwrap();
        let session = CartSession::new();
        let id = find_id(&catalog, "Linen Wrap Dress");

        session
            .add_item(&catalog, &id, Size::M, Color::Beige)
            .unwrap();

        let cart = session.snapshot();
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].product.id, id);
        assert_eq!(cart.subtotal().cents(), 8999);
    }

    #[test]
    fn test_add_item_unknown_product() {
        let catalog = sample_catalog().unwrap();
        let session = CartSession::new();

        let err = session
            .add_item(&catalog, "missing", Size::M, Color::Black)
            .unwrap_err();
        assert!(matches!(err, StoreError::ProductNotFound(_)));
    }

    #[test]
    fn test_add_item_rejects_unoffered_color() {
        let catalog = sample_catalog().unwrap();
        let session = CartSession::new();
        let id = find_id(&catalog, "Linen Wrap Dress");

        // Linen Wrap Dress comes in Beige/White/Green only
        let err = session
            .add_item(&catalog, &id, Size::M, Color::Burgundy)
            .unwrap_err();
        assert!(matches!(err, StoreError::Core(_)));
        assert!(session.is_empty());
    }

    #[test]
    fn test_update_and_remove_through_session() {
        let catalog = sample_catalog().unwrap();
        let session = CartSession::new();
        let id = find_id(&catalog, "Silk Slip Dress");

        session
            .add_item(&catalog, &id, Size::S, Color::Gold)
            .unwrap();
        let key = session.snapshot().lines()[0].key();

        session.update_quantity(&key, 3).unwrap();
        assert_eq!(session.totals().total_quantity, 3);

        assert!(session.remove_item(&key));
        assert!(session.is_empty());
        assert!(!session.remove_item(&key));
    }

    #[test]
    fn test_checkout_clears_and_summarizes() {
        let catalog = sample_catalog().unwrap();
        let session = CartSession::new();
        let id = find_id(&catalog, "Linen Wrap Dress");

        session
            .add_item(&catalog, &id, Size::M, Color::Beige)
            .unwrap();
        session
            .add_item(&catalog, &id, Size::M, Color::Beige)
            .unwrap();

        let avg = catalog.average_carbon_footprint();
        let summary = session.checkout(&catalog).unwrap();

        assert_eq!(summary.total_quantity, 2);
        assert!((summary.total_footprint_kg - 7.6).abs() < 1e-9);
        assert!(summary.carbon_saved_kg > 0.0);
        assert!((summary.average_if_bought_kg - avg * 2.0).abs() < 1e-9);
        assert_ne!(summary.impact, ImpactTier::Standard);
        // Verified product: 5% cashback on 2 × $89.99
        assert_eq!(summary.cashback.cents(), 900);

        // Cart is reset after the snapshot
        assert!(session.is_empty());
        assert!(session.totals().subtotal.is_zero());
    }

    #[test]
    fn test_checkout_empty_cart_rejected() {
        let catalog = sample_catalog().unwrap();
        let session = CartSession::new();

        let err = session.checkout(&catalog).unwrap_err();
        assert!(matches!(err, StoreError::EmptyCart));
    }

    /// In-memory sink for asserting on emitted log lines.
    #[derive(Clone)]
    struct SharedWriter(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for SharedWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_checkout_emits_completion_event() {
        let sink = Arc::new(Mutex::new(Vec::new()));
        let writer = SharedWriter(sink.clone());
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let catalog = sample_catalog().unwrap();
            let session = CartSession::new();
            let id = find_id(&catalog, "Linen Wrap Dress");

            session
                .add_item(&catalog, &id, Size::M, Color::Beige)
                .unwrap();
            session.checkout(&catalog).unwrap();
        });

        let output = String::from_utf8(sink.lock().unwrap().clone()).unwrap();
        assert!(output.contains("checkout completed"));
        assert!(output.contains("tier="));
        assert!(output.contains("cashback="));
    }

    #[test]
    fn test_clones_share_one_cart() {
        let catalog = sample_catalog().unwrap();
        let session = CartSession::new();
        let handle = session.clone();
        let id = find_id(&catalog, "Festival Kaftan");

        session
            .add_item(&catalog, &id, Size::L, Color::Emerald)
            .unwrap();
        assert_eq!(handle.totals().line_count, 1);

        handle.clear();
        assert!(session.is_empty());
    }
}
