mod config;
mod errors;
mod llm_client;
mod recruiter;
mod resume;
mod routes;
mod state;
mod tracker;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::resume::pdf::PdfiumRasterizer;
use crate::routes::build_router;
use crate::state::AppState;
use crate::tracker::store::TrackerStore;

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

    info!("Starting Resume Checker v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let model = GeminiClient::new(config.google_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize PDF rasterizer; a missing pdfium only breaks uploads, not the server
    let rasterizer = PdfiumRasterizer::new(config.pdfium_lib_dir.clone(), config.render_max_pixels);
    match rasterizer.check_library() {
        Ok(()) => info!("pdfium bound (max {} px)", config.render_max_pixels),
        Err(e) => warn!("{e}; résumé uploads will fail until pdfium is installed"),
    }

    let state = AppState {
        model: Arc::new(model),
        rasterizer: Arc::new(rasterizer),
        tracker: TrackerStore::new(),
    };

    let app = build_router(state, config.max_upload_bytes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
