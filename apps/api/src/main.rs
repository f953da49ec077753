mod config;
mod document;
mod errors;
mod export;
mod layout;
mod llm_client;
mod models;
mod render;
mod routes;
mod state;
mod tailor;
mod templates;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::document::DocumentStore;
use crate::layout::PageMetrics;
use crate::llm_client::LlmClient;
use crate::models::sample::sample_resume;
use crate::routes::build_router;
use crate::state::AppState;
use crate::tailor::GeminiTailor;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{target}={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Architect API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.google_genai_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Seed the document with the sample resume so the editor starts populated
    let document = Arc::new(DocumentStore::new(sample_resume()));

    // Page geometry for layout and export
    let page_metrics = PageMetrics::a4();
    info!(
        "Page metrics: {}x{}pt, {}pt margins",
        page_metrics.width_pt, page_metrics.height_pt, page_metrics.margin_pt
    );

    // Build app state
    let state = AppState {
        document,
        tailor: Arc::new(GeminiTailor::new(llm)),
        config: config.clone(),
        page_metrics,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
