//! # Pricing
//!
//! Sale totals, flat discount allocation and the per-product regrouping
//! sent back to clients.
//!
//! ## Sale Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  store.sale(items)        [Club, Shorts, Shorts]     (one entry / unit) │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  apply_discount($30)      $30 → 3000¢ / 3 units = 1000¢ off each        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  summarize_sale           Club ×1, Shorts ×2, total                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Discounting happens on the flat list, before grouping.

use std::collections::HashMap;

use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Product, SaleLine, SaleSummary};
use crate::validation::ValidationResult;

fn overflow(field: &str) -> ValidationError {
    ValidationError::Overflow {
        field: field.to_string(),
    }
}

/// Sums the unit prices of `products`. Zero for an empty slice.
///
/// Fails with [`ValidationError::Overflow`] if the sum does not fit in cents.
pub fn total_price(products: &[Product]) -> ValidationResult<Money> {
    products
        .iter()
        .try_fold(Money::zero(), |acc, p| acc.checked_add(p.price))
        .ok_or_else(|| overflow("totalPrice"))
}

/// Spreads a flat discount of `dollar_discount` whole currency units evenly
/// over every unit in `products`.
///
/// Each unit's `price` drops by `dollar_discount * 100 / len` cents (truncated)
/// and its `discount` is set to that amount. Leftover cents from the
/// truncation are not redistributed. A negative discount raises prices.
///
/// Returns `products` untouched when the discount is zero or there are no
/// units to spread it over.
///
/// ```rust
/// use uuid::Uuid;
/// use vend_core::{apply_discount, Money, Product};
///
/// let items = vec![
///     Product::new(Uuid::new_v4(), "A", Money::from_cents(1000)),
///     Product::new(Uuid::new_v4(), "B", Money::from_cents(1000)),
/// ];
/// let discounted = apply_discount(items, 10)?;
/// assert!(discounted.iter().all(|p| p.price.cents() == 500));
/// assert!(discounted.iter().all(|p| p.discount.cents() == 500));
/// # Ok::<(), vend_core::ValidationError>(())
/// ```
pub fn apply_discount(
    products: Vec<Product>,
    dollar_discount: i64,
) -> ValidationResult<Vec<Product>> {
    if dollar_discount == 0 || products.is_empty() {
        return Ok(products);
    }

    let per_item = Money::checked_from_dollars(dollar_discount)
        .and_then(|total| total.split_evenly(products.len()))
        .ok_or_else(|| overflow("dollarDiscount"))?;

    products
        .into_iter()
        .map(|mut p| -> ValidationResult<Product> {
            p.price = p.price.checked_sub(per_item).ok_or_else(|| overflow("price"))?;
            p.discount = per_item;
            Ok(p)
        })
        .collect()
}

/// Regroups a flat per-unit list into one line per distinct product id.
///
/// Lines keep the order in which each product first appears. The product
/// fields of a line come from its first unit; `total_price` is the sum of
/// every unit's (possibly discounted) price.
pub fn summarize_sale(products: &[Product]) -> ValidationResult<SaleSummary> {
    let mut lines: Vec<SaleLine> = Vec::new();
    let mut index: HashMap<Uuid, usize> = HashMap::new();

    for p in products {
        match index.get(&p.id) {
            Some(&i) => {
                let line = &mut lines[i];
                line.quantity += 1;
                line.total_price = line
                    .total_price
                    .checked_add(p.price)
                    .ok_or_else(|| overflow("totalPrice"))?;
            }
            None => {
                index.insert(p.id, lines.len());
                lines.push(SaleLine {
                    product: p.clone(),
                    quantity: 1,
                    total_price: p.price,
                });
            }
        }
    }

    Ok(SaleSummary {
        lines,
        total_price: total_price(products)?,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn product(name: &str, cents: i64) -> Product {
        Product::new(Uuid::new_v4(), name, Money::from_cents(cents))
    }

    #[test]
    fn test_total_price_empty() {
        assert_eq!(total_price(&[]), Ok(Money::zero()));
    }

    #[test]
    fn test_total_price_sums_units() {
        let club = product("Golf Club", 100000);
        let shorts = product("Nike Shorts", 1000);
        let units = vec![club, shorts.clone(), shorts];
        assert_eq!(total_price(&units).unwrap().cents(), 102000);
    }

    #[test]
    fn test_zero_discount_is_identity() {
        let units = vec![product("A", 1000), product("B", 250)];
        let out = apply_discount(units.clone(), 0).unwrap();
        assert_eq!(out, units);
    }

    #[test]
    fn test_discount_split_across_two_items() {
        let units = vec![product("A", 1000), product("B", 1000)];
        let out = apply_discount(units, 10).unwrap();

        assert_eq!(out.len(), 2);
        for p in &out {
            assert_eq!(p.price.cents(), 500);
            assert_eq!(p.discount.cents(), 500);
        }
    }

    #[test]
    fn test_discount_truncates_residual_cents() {
        let units = vec![product("A", 1000), product("B", 1000), product("C", 1000)];
        let out = apply_discount(units, 10).unwrap();

        // 1000 / 3 = 333, one cent of the discount is never applied
        assert!(out.iter().all(|p| p.discount.cents() == 333));
        assert_eq!(total_price(&out).unwrap().cents(), 3000 - 999);
    }

    #[test]
    fn test_discount_can_push_price_negative() {
        let out = apply_discount(vec![product("Gum", 50)], 1).unwrap();
        assert_eq!(out[0].price.cents(), -50);
        assert_eq!(out[0].discount.cents(), 100);
    }

    #[test]
    fn test_discount_on_empty_sale_is_noop() {
        assert!(apply_discount(Vec::new(), 10).unwrap().is_empty());
        assert!(apply_discount(Vec::new(), i64::MAX).unwrap().is_empty());
    }

    #[test]
    fn test_summarize_groups_in_first_seen_order() {
        let club = product("Golf Club", 100000);
        let shorts = product("Nike Shorts", 1000);
        let units = vec![shorts.clone(), club.clone(), shorts.clone()];

        let summary = summarize_sale(&units).unwrap();

        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.lines[0].product.id, shorts.id);
        assert_eq!(summary.lines[0].quantity, 2);
        assert_eq!(summary.lines[0].total_price.cents(), 2000);
        assert_eq!(summary.lines[1].product.id, club.id);
        assert_eq!(summary.lines[1].quantity, 1);
        assert_eq!(summary.total_price.cents(), 102000);
        assert_eq!(summary.unit_count(), 3);
    }

    #[test]
    fn test_summarize_after_discount() {
        let shorts = product("Nike Shorts", 1000);
        let units = apply_discount(vec![shorts.clone(), shorts], 10).unwrap();

        let summary = summarize_sale(&units).unwrap();

        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.lines[0].product.discount.cents(), 500);
        assert_eq!(summary.lines[0].total_price.cents(), 1000);
        assert_eq!(summary.total_price.cents(), 1000);
    }

    #[test]
    fn test_negative_discount_raises_prices() {
        let out = apply_discount(vec![product("A", 1000), product("B", 1000)], -10).unwrap();
        assert!(out.iter().all(|p| p.price.cents() == 1500));
        assert!(out.iter().all(|p| p.discount.cents() == -500));
    }

    #[test]
    fn test_discount_overflow_is_an_error() {
        let units = vec![product("A", 1000)];
        assert_eq!(
            apply_discount(units.clone(), i64::MAX),
            Err(ValidationError::Overflow {
                field: "dollarDiscount".to_string()
            })
        );

        let pricey = vec![product("Yacht", i64::MAX)];
        assert!(matches!(
            apply_discount(pricey, -1),
            Err(ValidationError::Overflow { .. })
        ));
    }

    #[test]
    fn test_totals_overflow_is_an_error() {
        let pricey = product("Yacht", i64::MAX);
        let units = vec![pricey.clone(), pricey];

        assert_eq!(
            total_price(&units),
            Err(ValidationError::Overflow {
                field: "totalPrice".to_string()
            })
        );
        assert!(summarize_sale(&units).is_err());

        // A single unit at the maximum still fits.
        let one = summarize_sale(&units[..1]).unwrap();
        assert_eq!(one.total_price.cents(), i64::MAX);
    }

    #[test]
    fn test_summarize_many_distinct_products() {
        let catalog: Vec<Product> = (0..500).map(|i| product(&format!("p{i}"), 1)).collect();
        let units: Vec<Product> = catalog.iter().chain(catalog.iter()).cloned().collect();

        let summary = summarize_sale(&units).unwrap();

        assert_eq!(summary.lines.len(), 500);
        assert!(summary.lines.iter().all(|l| l.quantity == 2));
        assert_eq!(summary.lines[0].product.id, catalog[0].id);
        assert_eq!(summary.lines[499].product.id, catalog[499].id);
        assert_eq!(summary.total_price.cents(), 1000);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize_sale(&[]).unwrap();
        assert!(summary.lines.is_empty());
        assert!(summary.total_price.is_zero());
    }
}
