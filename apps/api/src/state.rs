use std::sync::Arc;

use crate::llm_client::GenerativeModel;
use crate::resume::pdf::PdfRasterizer;
use crate::tracker::store::TrackerStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable model backend. Default: GeminiClient.
    pub model: Arc<dyn GenerativeModel>,
    /// Pluggable first-page renderer. Default: PdfiumRasterizer.
    pub rasterizer: Arc<dyn PdfRasterizer>,
    pub tracker: TrackerStore,
}
