//! # Repository Module
//!
//! The catalog contract and its implementations.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  state.store.sale(&items)                                       │
//! │       ▼                                                                 │
//! │  dyn ProductStore                                                      │
//! │  ├── list_products(&self)                                              │
//! │  ├── create_product(&self, name, price)                                │
//! │  └── sale(&self, items)                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InMemoryStore (Mutex<HashMap<Uuid, Product>>)                         │
//! │                                                                         │
//! │  Handlers only see the trait, so tests can hand the router any store.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Implementations
//!
//! - [`InMemoryStore`](memory::InMemoryStore) - process-local catalog

pub mod memory;

use vend_core::{LineItem, Money, Product};

use crate::error::StoreResult;

/// Product catalog operations.
///
/// Implementations are synchronous and must serialise their operations:
/// a `sale` observes either all or none of a concurrent `create_product`.
///
/// Implementations validate their own input (non-empty name, non-negative
/// price, positive quantities, bounded sale size) and do not rely on
/// callers having done so.
pub trait ProductStore: Send + Sync {
    /// Returns every product in the catalog, in no particular order.
    fn list_products(&self) -> StoreResult<Vec<Product>>;

    /// Adds a product under a freshly generated id and returns the stored copy.
    fn create_product(&self, name: &str, price: Money) -> StoreResult<Product>;

    /// Resolves `items` against the catalog.
    ///
    /// Returns one copy of the product per unit, line items in input order,
    /// units of a line item contiguous. Fails as a whole if any product id is
    /// unknown. Stored products are never modified.
    fn sale(&self, items: &[LineItem]) -> StoreResult<Vec<Product>>;
}
