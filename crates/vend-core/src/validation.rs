//! # Validation Module
//!
//! Input validation utilities for Vend POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP handler (vend-server)                                   │
//! │  ├── JSON shape (deserialization)                                      │
//! │  └── THIS MODULE: field rules, per-item index in messages              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Store (vend-store)                                           │
//! │  └── THIS MODULE again: name / price / quantity / sale size            │
//! │      (callers that bypass HTTP still cannot corrupt the catalog)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vend_core::validation::{validate_product_name, validate_quantity};
//!
//! assert!(validate_product_name("Golf Club").is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_SALE_UNITS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
///
/// Whitespace counts as content: `" "` is a valid name.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Parses a product id from its string form.
///
/// ## Example
/// ```rust
/// use vend_core::validation::parse_product_id;
///
/// assert!(parse_product_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(parse_product_id("not-a-uuid").is_err());
/// ```
pub fn parse_product_id(raw: &str) -> ValidationResult<Uuid> {
    if raw.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "productId".to_string(),
        });
    }

    Uuid::parse_str(raw).map_err(|e| ValidationError::InvalidFormat {
        field: "productId".to_string(),
        reason: e.to_string(),
    })
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price_cents(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
            actual: price.cents(),
        });
    }

    Ok(())
}

/// Validates a line item quantity.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
            actual: qty,
        });
    }

    Ok(())
}

/// Validates the quantities of a whole sale and returns the unit count.
///
/// ## Rules
/// - Every quantity must be positive
/// - The sum must not exceed [`MAX_SALE_UNITS`]
pub fn validate_sale_units(
    quantities: impl IntoIterator<Item = i64>,
) -> ValidationResult<usize> {
    let mut units: i64 = 0;

    for qty in quantities {
        validate_quantity(qty)?;
        units = units.saturating_add(qty);
    }

    if units > MAX_SALE_UNITS {
        return Err(ValidationError::OutOfRange {
            field: "units".to_string(),
            min: 0,
            max: MAX_SALE_UNITS,
            actual: units,
        });
    }

    usize::try_from(units).map_err(|_| ValidationError::Overflow {
        field: "units".to_string(),
    })
}

/// Validates a flat sale discount in whole currency units.
///
/// Any sign is accepted (a negative discount raises prices); the only
/// constraint is that the amount fits in cents.
pub fn validate_dollar_discount(dollars: i64) -> ValidationResult<()> {
    match Money::checked_from_dollars(dollars) {
        Some(_) => Ok(()),
        None => Err(ValidationError::OutOfRange {
            field: "dollarDiscount".to_string(),
            min: i64::MIN / 100,
            max: i64::MAX / 100,
            actual: dollars,
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
