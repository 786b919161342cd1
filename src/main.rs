use std::sync::Arc;

use tracing::info;

use catalog_service::catalog::CatalogStore;
use catalog_service::config::Config;
use catalog_service::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,catalog_service=debug".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Catalog Service  —  Rust + Axum     ║");
    info!("╚══════════════════════════════════════╝");

    // Catalog is populated exactly once, before the listener binds. Bad or
    // missing data degrades to an empty catalog instead of aborting startup.
    let catalog = Arc::new(CatalogStore::load(config.catalog_path.as_deref()));

    let state = AppState::new(catalog);
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
