//! # Demo Catalog
//!
//! Populates a fresh store with a few products so a freshly started
//! server has something to sell.
//!
//! ## Generated Products
//! | Name        | Price (cents) |
//! |-------------|---------------|
//! | Golf Club   | 100000        |
//! | Nike Shorts | 1000          |
//! | Toothbrush  | 1000          |

use tracing::info;
use vend_core::{Money, Product};

use crate::error::StoreResult;
use crate::repository::ProductStore;

/// Products created by [`seed_demo_catalog`], as `(name, price in cents)`.
pub const DEMO_PRODUCTS: &[(&str, i64)] = &[
    ("Golf Club", 100000),
    ("Nike Shorts", 1000),
    ("Toothbrush", 1000),
];

/// Creates the demo products in `store` and returns them.
///
/// Every call creates new products with new ids; seeding twice doubles the
/// catalog.
pub fn seed_demo_catalog(store: &dyn ProductStore) -> StoreResult<Vec<Product>> {
    let mut created = Vec::with_capacity(DEMO_PRODUCTS.len());

    for (name, cents) in DEMO_PRODUCTS {
        let product = store.create_product(name, Money::from_cents(*cents))?;
        info!(id = %product.id, name = %product.name, price = %product.price, "Seeded product");
        created.push(product);
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryStore;

    #[test]
    fn test_seed_creates_demo_products() {
        let store = InMemoryStore::new();
        let created = seed_demo_catalog(&store).unwrap();

        assert_eq!(created.len(), 3);
        assert_eq!(store.len().unwrap(), 3);

        let names: Vec<&str> = created.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Golf Club", "Nike Shorts", "Toothbrush"]);
        assert_eq!(created[0].price.cents(), 100000);
    }
}
