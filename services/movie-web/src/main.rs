mod config;
mod pages;
mod render;
mod router;
mod routes_listings;
mod routes_movies;
mod routes_pages;
mod state;

use std::sync::Arc;

use anyhow::{Context, Result};
use moviedata::DatasetSlot;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::render::Renderer;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = AppConfig::from_env()?;

    // Load before binding so no request ever sees a half-loaded dataset.
    // A failed load is logged and the pages that need data answer 503.
    let dataset = DatasetSlot::load(&cfg.dataset_path);
    let renderer = Renderer::new().context("Failed to compile page templates")?;

    let app_state = Arc::new(AppState::new(cfg.clone(), dataset, renderer));
    let app = router::build_router(app_state);

    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("movie-web listening on http://{addr}");
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
