mod candidates;
mod config;
mod errors;
mod models;
mod ranking;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::candidates::store::CandidateStore;
use crate::config::Config;
use crate::ranking::ranker::TfidfRanker;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting candidate ranking API v{}", env!("CARGO_PKG_VERSION"));

    // Resume files land here, stored opaquely and never parsed
    tokio::fs::create_dir_all(&config.upload_dir).await?;
    info!("Upload directory ready at {}", config.upload_dir.display());

    // Build app state: in-memory candidate list + default TF-IDF ranker.
    // No database — the candidate list does not survive a restart.
    let state = AppState {
        config: config.clone(),
        candidates: CandidateStore::new(),
        ranker: Arc::new(TfidfRanker),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
