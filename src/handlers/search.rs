use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::{models::Product, AppState};

// ── Query parameters ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Required; a request without `term` is rejected with 400 by the
    /// extractor before this handler runs.
    pub term: String,
}

// ── Search ────────────────────────────────────────────────────────────────────

pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Product>> {
    let results = state.search.search_products(&params.term);

    info!(term = %params.term, count = results.len(), "Searched products");

    Json(results)
}
