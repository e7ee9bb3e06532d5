//! Request bodies and their validation.
//!
//! Bodies are decoded leniently: a missing field takes its zero value
//! (`""`, `0`, empty list), and the `Content-Type` header is not checked.
//! Validation then decides whether the zero value is acceptable.
//!
//! Responses reuse the `vend-core` types directly (`Product`,
//! `SaleSummary`), whose serde attributes already match the wire format.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use vend_core::validation::{
    parse_product_id, validate_dollar_discount, validate_price_cents, validate_product_name,
    validate_quantity, ValidationResult,
};
use vend_core::{LineItem, Money};

use crate::error::ApiError;

/// Decodes a JSON request body, mapping any failure to a 400.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body)
        .map_err(|e| ApiError::validation(format!("malformed request body: {e}")))
}

/// `POST /products`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateProductRequest {
    pub name: String,
    /// Price in cents.
    pub price: i64,
}

impl CreateProductRequest {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_product_name(&self.name)?;
        validate_price_cents(self.price())
    }

    pub fn price(&self) -> Money {
        Money::from_cents(self.price)
    }
}

/// `POST /sales`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateSaleRequest {
    /// Flat discount in whole currency units, spread over every unit sold.
    pub dollar_discount: i64,
    /// `null` is treated like an empty list.
    pub sales: Option<Vec<SaleItemRequest>>,
}

/// One element of `sales`. The id stays a string until validated so the
/// error can name the offending index.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SaleItemRequest {
    pub product_id: String,
    pub quantity: i64,
}

impl CreateSaleRequest {
    /// Validates the request and converts it into store line items.
    pub fn line_items(&self) -> ValidationResult<Vec<LineItem>> {
        validate_dollar_discount(self.dollar_discount)?;

        self.sales
            .iter()
            .flatten()
            .enumerate()
            .map(|(index, item)| {
                let product_id =
                    parse_product_id(&item.product_id).map_err(|e| e.at_index(index))?;
                validate_quantity(item.quantity).map_err(|e| e.at_index(index))?;
                Ok(LineItem::new(product_id, item.quantity))
            })
            .collect()
    }
}
