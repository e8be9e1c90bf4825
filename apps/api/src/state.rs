use std::sync::Arc;

use crate::analysis::AnalysisProvider;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable analysis provider. Production uses `GeminiClient`; tests stub it.
    pub analysis: Arc<dyn AnalysisProvider>,
    pub config: Config,
}
