use std::sync::Arc;

use crate::config::Config;
use crate::document::DocumentStore;
use crate::layout::PageMetrics;
use crate::tailor::TailorProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single in-memory resume document this service edits and renders.
    pub document: Arc<DocumentStore>,
    /// Pluggable tailoring backend. Default: GeminiTailor over the LLM client.
    pub tailor: Arc<dyn TailorProvider>,
    pub config: Config,
    /// Page geometry for layout and export. A4 with 48pt margins.
    pub page_metrics: PageMetrics,
}
