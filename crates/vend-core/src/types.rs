//! # Domain Types
//!
//! Core domain types used throughout Vend POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    LineItem     │   │   SaleSummary   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  product_id     │   │  lines          │       │
//! │  │  name           │   │  quantity       │   │  total_price    │       │
//! │  │  price (Money)  │   └─────────────────┘   └────────┬────────┘       │
//! │  │  discount       │                                  │                 │
//! │  └─────────────────┘                         ┌────────▼────────┐       │
//! │                                              │    SaleLine     │       │
//! │                                              │  product        │       │
//! │                                              │  quantity       │       │
//! │                                              │  total_price    │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Copy Semantics
//! A sale never hands out references into the catalog. Every `Product`
//! leaving the store is a clone, so discounting a sale result can never
//! leak back into stored prices.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// ## Wire Shape
/// ```json
/// { "id": "6f1c…", "name": "Golf Club", "price": 100000 }
/// ```
/// `discount` only appears on sale results, and only when non-zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4), assigned by the store.
    pub id: Uuid,

    /// Display name shown to cashier and on receipt.
    pub name: String,

    /// Unit price in cents.
    pub price: Money,

    /// Per-unit discount in cents. Zero in the catalog.
    #[serde(default, skip_serializing_if = "Money::is_zero")]
    pub discount: Money,
}

impl Product {
    /// Creates an undiscounted product.
    pub fn new(id: Uuid, name: impl Into<String>, price: Money) -> Self {
        Product {
            id,
            name: name.into(),
            price,
            discount: Money::zero(),
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// A requested purchase: `quantity` units of the product `product_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: Uuid,
    pub quantity: i64,
}

impl LineItem {
    pub fn new(product_id: Uuid, quantity: i64) -> Self {
        LineItem {
            product_id,
            quantity,
        }
    }
}

// =============================================================================
// Sale Summary
// =============================================================================

/// Units of one product within a sale, regrouped from the flat unit list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleLine {
    /// The first unit seen for this product (carries its discount, if any).
    #[serde(flatten)]
    pub product: Product,
    pub quantity: i64,
    pub total_price: Money,
}

/// Client-facing result of a sale.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleSummary {
    #[serde(rename = "products")]
    pub lines: Vec<SaleLine>,
    pub total_price: Money,
}

impl SaleSummary {
    /// Number of units across all lines.
    pub fn unit_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_product_omits_discount() {
        let p = Product::new(Uuid::nil(), "Toothbrush", Money::from_cents(1000));
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["name"], "Toothbrush");
        assert_eq!(json["price"], 1000);
        assert!(json.get("discount").is_none());
    }

    #[test]
    fn test_discounted_product_includes_discount() {
        let mut p = Product::new(Uuid::nil(), "Toothbrush", Money::from_cents(1000));
        p.discount = Money::from_cents(250);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["discount"], 250);
    }

    #[test]
    fn test_sale_line_flattens_product() {
        let line = SaleLine {
            product: Product::new(Uuid::nil(), "Nike Shorts", Money::from_cents(1000)),
            quantity: 2,
            total_price: Money::from_cents(2000),
        };
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["name"], "Nike Shorts");
        assert_eq!(json["quantity"], 2);
        assert_eq!(json["totalPrice"], 2000);
    }

    #[test]
    fn test_summary_wire_names() {
        let summary = SaleSummary::default();
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["products"].as_array().unwrap().is_empty());
        assert_eq!(json["totalPrice"], 0);
        assert_eq!(summary.unit_count(), 0);
    }
}
