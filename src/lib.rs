use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use crate::catalog::CatalogStore;
use crate::services::{lookup::LookupService, search::SearchService};

/// Shared application state — cheap to clone (catalog behind Arc).
#[derive(Clone)]
pub struct AppState {
    pub lookup: LookupService,
    pub search: SearchService,
}

impl AppState {
    /// Both services read from the same catalog; the store is built once at
    /// startup and never mutated afterwards.
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self {
            lookup: LookupService::new(Arc::clone(&catalog)),
            search: SearchService::new(catalog),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Products ────────────────────────────────────────────────────────
        .route("/products/:product_id", get(handlers::products::get_product))

        // ── Search ──────────────────────────────────────────────────────────
        .route("/search", get(handlers::search::search_products))

        // ── Echo ────────────────────────────────────────────────────────────
        .route("/test/:text", get(handlers::echo::echo))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
