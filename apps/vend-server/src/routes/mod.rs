//! Route table.
//!
//! | Method | Path        | Handler                      |
//! |--------|-------------|------------------------------|
//! | GET    | `/products` | [`products::list_products`]  |
//! | POST   | `/products` | [`products::create_product`] |
//! | POST   | `/sales`    | [`sales::create_sale`]       |
//! | GET    | `/health`   | [`health`]                   |

pub mod products;
pub mod sales;

use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;

use crate::AppState;

/// Builds the API routes. State is supplied by the caller.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route("/sales", post(sales::create_sale))
        .route("/health", get(health))
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    "OK"
}
