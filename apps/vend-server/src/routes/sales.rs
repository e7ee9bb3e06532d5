//! Sale endpoint.
//!
//! ## Flow
//! ```text
//! body ──► line_items() ──► store.sale() ──► apply_discount() ──► summarize_sale()
//!          (400 on bad     (400 on unknown   (flat list, one      (grouped by id,
//!           id/quantity)    product or        entry per unit)      first-seen order)
//!                           oversized sale)
//!
//! Amounts that overflow 64-bit cents in either of the last two steps are
//! reported as 400.
//! ```

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use tracing::info;
use vend_core::{apply_discount, summarize_sale, SaleSummary};

use crate::dto::{decode_json, CreateSaleRequest};
use crate::error::ApiResult;
use crate::AppState;

/// `POST /sales`
pub async fn create_sale(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<SaleSummary>> {
    let req: CreateSaleRequest = decode_json(&body)?;
    let items = req.line_items()?;

    let sold = state.store.sale(&items)?;
    let discounted = apply_discount(sold, req.dollar_discount)?;
    let summary = summarize_sale(&discounted)?;

    info!(
        lines = summary.lines.len(),
        units = summary.unit_count(),
        discount = req.dollar_discount,
        total = %summary.total_price,
        "Sale completed"
    );

    Ok(Json(summary))
}
