use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::{error::AppResult, models::Product, AppState};

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> AppResult<Json<Product>> {
    let product = state.lookup.get_product(&product_id)?;

    info!(id = %product_id, "Fetched product");

    Ok(Json(product))
}
