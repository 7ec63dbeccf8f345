mod config;
mod dashboard;
mod errors;
mod fixtures;
mod leaderboard;
mod llm_client;
mod models;
mod prediction;
mod report;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::fixtures::SampleData;
use crate::llm_client::LlmClient;
use crate::prediction::in_flight::InFlightRequests;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting EcoPulse API v{}", env!("CARGO_PKG_VERSION"));

    // Sample data for dashboard, leaderboard and form defaults
    let sample_data = SampleData::load(config.sample_data_path.as_deref())?;
    let current_company = config
        .current_company
        .clone()
        .unwrap_or_else(|| sample_data.company.name.clone());
    info!("Current company: {current_company}");

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        llm: Arc::new(llm),
        sample_data: Arc::new(sample_data),
        current_company,
        in_flight: InFlightRequests::default(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the dashboard host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
