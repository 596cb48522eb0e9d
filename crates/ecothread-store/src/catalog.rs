//! # Catalog Module
//!
//! The in-memory product catalog: reference data for every storefront page
//! and the sole collaborator the cart engine reads from.
//!
//! ## Responsibilities
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog                                         │
//! │                                                                         │
//! │  Reference reads        Admin CRUD             Merchandising queries    │
//! │  ───────────────        ──────────             ─────────────────────    │
//! │  get(id)                insert(draft)          featured()               │
//! │  list()                 update(id, draft)      by_category(cat)         │
//! │  average_carbon_        remove(id)             eco_friendly()           │
//! │    footprint()                                 verified()               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The average footprint is recomputed from the live product list on every
//! read. A stale cached average would let badge percentages and cart labels
//! disagree after an admin edit.

use serde::{Deserialize, Serialize};
use tracing::info;

use ecothread_core::pricing::{average_carbon_footprint, is_low_carbon};
use ecothread_core::{Category, Product, ProductDraft};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Catalog
// =============================================================================

/// Ordered in-memory product collection.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog {
            products: Vec::new(),
        }
    }

    /// Builds a catalog by authoring every draft in order.
    pub fn from_drafts(drafts: Vec<ProductDraft>) -> StoreResult<Self> {
        let mut catalog = Catalog::new();
        for draft in drafts {
            catalog.insert(draft)?;
        }
        Ok(catalog)
    }

    // -------------------------------------------------------------------------
    // Reference reads
    // -------------------------------------------------------------------------

    /// Looks up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products, in authoring order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Arithmetic mean footprint across the catalog, in kg CO2e.
    ///
    /// Recomputed on every call; 0.0 for an empty catalog.
    pub fn average_carbon_footprint(&self) -> f64 {
        average_carbon_footprint(self.products.iter().map(|p| p.carbon_footprint_kg))
    }

    // -------------------------------------------------------------------------
    // Admin CRUD
    // -------------------------------------------------------------------------

    /// Authors a new product from a draft and appends it to the catalog.
    ///
    /// Returns the stored record (with its assigned id and timestamp).
    pub fn insert(&mut self, draft: ProductDraft) -> StoreResult<Product> {
        let product = Product::new(draft)?;
        info!(id = %product.id, name = %product.name, verified = product.is_eco_verified(), "product added");
        self.products.push(product.clone());
        Ok(product)
    }

    /// Replaces an existing product with a revision authored from a draft.
    ///
    /// Identity and creation timestamp are preserved; the verification flag
    /// is re-derived from the draft's certificate.
    pub fn update(&mut self, id: &str, draft: ProductDraft) -> StoreResult<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::ProductNotFound(id.to_string()))?;

        let revised = self.products[index].revised(draft)?;
        info!(id = %revised.id, name = %revised.name, "product updated");
        self.products[index] = revised.clone();
        Ok(revised)
    }

    /// Removes a product from the catalog.
    ///
    /// Open carts are unaffected: their lines hold snapshots.
    pub fn remove(&mut self, id: &str) -> StoreResult<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::ProductNotFound(id.to_string()))?;

        let removed = self.products.remove(index);
        info!(id = %removed.id, name = %removed.name, "product removed");
        Ok(removed)
    }

    // -------------------------------------------------------------------------
    // Merchandising queries
    // -------------------------------------------------------------------------

    /// Products in the given collection.
    pub fn by_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Products featured on the home page.
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Products strictly below the catalog-average footprint.
    ///
    /// Classification goes through the pricing engine's predicate, so this
    /// listing can never disagree with the discount badges it sits next to.
    pub fn eco_friendly(&self) -> Vec<&Product> {
        let avg = self.average_carbon_footprint();
        self.products
            .iter()
            .filter(|p| is_low_carbon(p.carbon_footprint_kg, avg))
            .collect()
    }

    /// Products carrying a carbon certificate.
    pub fn verified(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.is_eco_verified())
            .collect()
    }

    /// Number of certificate-backed products.
    pub fn certified_count(&self) -> usize {
        self.products.iter().filter(|p| p.is_eco_verified()).count()
    }

    /// Number of products with only an estimated (uncertified) footprint.
    pub fn estimated_count(&self) -> usize {
        self.products
            .iter()
            .filter(|p| !p.is_eco_verified())
            .count()
    }
}

// =============================================================================
// Sorting & Grouping
// =============================================================================

/// Listing sort order. Closed set matching the filter dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Newest first (authoring timestamp, descending).
    #[default]
    Default,
    /// Cheapest first.
    PriceLow,
    /// Most expensive first.
    PriceHigh,
    /// Verified products first, then ascending footprint.
    EcoFriendly,
    /// Smallest footprint first.
    CarbonLow,
    /// Largest footprint first.
    CarbonHigh,
}

/// Sorts a product list by the given option.
///
/// All comparisons are stable, so equal products keep catalog order.
pub fn sorted<'a>(mut products: Vec<&'a Product>, sort: SortOption) -> Vec<&'a Product> {
    match sort {
        SortOption::Default => products.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOption::PriceLow => products.sort_by_key(|p| p.price_cents),
        SortOption::PriceHigh => products.sort_by_key(|p| std::cmp::Reverse(p.price_cents)),
        SortOption::EcoFriendly => products.sort_by(|a, b| {
            b.is_eco_verified()
                .cmp(&a.is_eco_verified())
                .then(a.carbon_footprint_kg.total_cmp(&b.carbon_footprint_kg))
        }),
        SortOption::CarbonLow => {
            products.sort_by(|a, b| a.carbon_footprint_kg.total_cmp(&b.carbon_footprint_kg))
        }
        SortOption::CarbonHigh => {
            products.sort_by(|a, b| b.carbon_footprint_kg.total_cmp(&a.carbon_footprint_kg))
        }
    }
    products
}

/// Certified-first grouping: partitions by verification, sorts each group
/// with the same option, and concatenates certified before estimated.
///
/// When `certified_first` is off this is a plain sort.
pub fn organized<'a>(
    products: Vec<&'a Product>,
    sort: SortOption,
    certified_first: bool,
) -> Vec<&'a Product> {
    if !certified_first {
        return sorted(products, sort);
    }

    let (certified, estimated): (Vec<_>, Vec<_>) =
        products.into_iter().partition(|p| p.is_eco_verified());

    let mut result = sorted(certified, sort);
    result.extend(sorted(estimated, sort));
    result
}

// =============================================================================
// Unit Tests
// =============================================================================
