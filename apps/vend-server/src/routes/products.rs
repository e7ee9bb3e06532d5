//! Catalog endpoints.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use tracing::info;
use vend_core::Product;

use crate::dto::{decode_json, CreateProductRequest};
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// `GET /products`
///
/// Returns every product in the catalog, or 404 when it is empty.
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    let products = state.store.list_products()?;

    if products.is_empty() {
        return Err(ApiError::not_found("No products"));
    }

    Ok(Json(products))
}

/// `POST /products`
pub async fn create_product(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<Product>> {
    let req: CreateProductRequest = decode_json(&body)?;
    req.validate()?;

    let product = state.store.create_product(&req.name, req.price())?;
    info!(id = %product.id, name = %product.name, price = %product.price, "Product created");

    Ok(Json(product))
}
