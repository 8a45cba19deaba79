mod assistant;
mod config;
mod errors;
mod llm_client;
mod profile;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::profile::ProfileContext;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("kyle_api={}", &config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Kyle API v{}", env!("CARGO_PKG_VERSION"));

    // Load the profile context once; it is immutable for the process lifetime
    let profile = ProfileContext::load(Path::new(&config.profile_path))?;
    info!("Profile context loaded from {}", config.profile_path);

    if config.anthropic_api_key.is_none() {
        warn!(
            "ANTHROPIC_API_KEY is not set; generative tasks will fail with a \
             configuration error until it is provided"
        );
    }

    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        llm,
        profile: Arc::new(profile),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
