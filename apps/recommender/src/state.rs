use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::recommendation::engine::RecommendationEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Keyword engine over the immutable skill catalog.
    pub engine: RecommendationEngine,
    /// Present only when GEMINI_API_KEY is configured.
    pub llm: Option<GeminiClient>,
    pub config: Config,
}
