mod config;
mod errors;
mod generation;
mod llm_client;
mod models;
mod pages;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::Instructions;
use crate::llm_client::GeminiClient;
use crate::pages::load_templates;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting persona listings v{}", env!("CARGO_PKG_VERSION"));

    let templates = load_templates(&config.templates_dir)?;

    let generator = GeminiClient::new(config.gemini_api_key.clone())?
        .with_api_base(config.gemini_api_base.clone())
        .with_max_retries(config.gemini_max_retries);
    info!("Gemini client initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        config: config.clone(),
        templates: Arc::new(templates),
        instructions: Arc::new(Instructions::default()),
        generator: Arc::new(generator),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
