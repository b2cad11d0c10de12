mod config;
mod db;
mod errors;
mod models;
mod render;
mod routes;
mod schema;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, run_migrations};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{MemoryResumeStore, PgResumeStore, ResumeStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Artboard v{}", env!("CARGO_PKG_VERSION"));

    let store = build_store(&config).await?;
    info!(
        "Default template: {}, asset base: '{}'",
        config.default_template, config.asset_base_url
    );

    let state = AppState {
        store,
        config: config.clone(),
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// PostgreSQL when `DATABASE_URL` is set, otherwise a process-local store.
async fn build_store(config: &Config) -> Result<Arc<dyn ResumeStore>> {
    match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            run_migrations(&pool).await?;
            info!("Using PostgreSQL resume store");
            Ok(Arc::new(PgResumeStore::new(pool)))
        }
        None => {
            info!("DATABASE_URL not set, using in-memory resume store");
            Ok(Arc::new(MemoryResumeStore::new()))
        }
    }
}
