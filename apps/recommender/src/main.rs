mod catalog;
mod config;
mod errors;
mod extract;
mod llm_client;
mod recommendation;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::SkillCatalog;
use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::recommendation::engine::RecommendationEngine;
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

    info!("Starting Recommender API v{}", env!("CARGO_PKG_VERSION"));

    // Catalog is immutable from here on; a bad file falls back to the built-in one
    let catalog = Arc::new(SkillCatalog::load_or_builtin(config.catalog_path.as_deref()));
    info!("Skill catalog ready ({} job titles)", catalog.len());

    let engine = RecommendationEngine::new(catalog).context("Failed to compile skill patterns")?;

    let llm = match &config.gemini_api_key {
        Some(key) => {
            let client = GeminiClient::new(key.clone())?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(client)
        }
        None => {
            info!("GEMINI_API_KEY not set, generative matching disabled");
            None
        }
    };

    let state = AppState {
        engine,
        llm,
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
