//! # In-Memory Product Store
//!
//! The catalog lives in a `HashMap` behind one `std::sync::Mutex`.
//!
//! ## Locking
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Lock, Whole Operation                            │
//! │                                                                         │
//! │  request A: list_products ──► lock ─ scan map ─ unlock                  │
//! │  request B: create_product ─────────────────────► lock ─ insert ─ unlock│
//! │  request C: sale ───────────────────────────────────────────► lock ...  │
//! │                                                                         │
//! │  • reads and writes are serialised identically (no RwLock)             │
//! │  • a sale resolves every line item under a single acquisition,         │
//! │    so it can never see half of a concurrent create                     │
//! │  • the guard is dropped on every return path, errors included          │
//! │  • hold time is O(catalog) for list, O(units) for sale                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no `.await` anywhere in here: the lock is never held across a
//! suspension point.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, warn};
use uuid::Uuid;
use vend_core::validation::{validate_price_cents, validate_product_name, validate_sale_units};
use vend_core::{LineItem, Money, Product};

use crate::error::{StoreError, StoreResult};
use crate::repository::ProductStore;

type Catalog = HashMap<Uuid, Product>;

/// Process-local product catalog.
///
/// ## Usage
/// ```rust
/// use vend_core::{LineItem, Money};
/// use vend_store::{InMemoryStore, ProductStore};
///
/// let store = InMemoryStore::new();
/// let club = store.create_product("Golf Club", Money::from_cents(100000))?;
///
/// let units = store.sale(&[LineItem::new(club.id, 2)])?;
/// assert_eq!(units.len(), 2);
/// # Ok::<(), vend_store::StoreError>(())
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    products: Mutex<Catalog>,
}

impl InMemoryStore {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        InMemoryStore {
            products: Mutex::new(HashMap::new()),
        }
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.lock()?.len())
    }

    /// Returns true if no product has been created yet.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Catalog>> {
        self.products.lock().map_err(|_| {
            warn!("catalog lock poisoned");
            StoreError::LockPoisoned
        })
    }
}

impl ProductStore for InMemoryStore {
    fn list_products(&self) -> StoreResult<Vec<Product>> {
        let products = self.lock()?;
        Ok(products.values().cloned().collect())
    }

    fn create_product(&self, name: &str, price: Money) -> StoreResult<Product> {
        validate_product_name(name)?;
        validate_price_cents(price)?;

        let product = Product::new(Uuid::new_v4(), name, price);

        let mut products = self.lock()?;
        products.insert(product.id, product.clone());

        Ok(product)
    }

    fn sale(&self, items: &[LineItem]) -> StoreResult<Vec<Product>> {
        let unit_count = validate_sale_units(items.iter().map(|i| i.quantity))?;

        let products = self.lock()?;

        let mut units = Vec::with_capacity(unit_count);
        for item in items {
            let product = products
                .get(&item.product_id)
                .ok_or_else(|| StoreError::not_found(item.product_id))?;

            units.extend(std::iter::repeat(product).take(item.quantity as usize).cloned());
        }
        drop(products);

        debug!(lines = items.len(), units = units.len(), "Sale resolved");
        Ok(units)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
