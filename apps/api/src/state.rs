use std::sync::Arc;

use crate::fixtures::SampleData;
use crate::llm_client::LanguageModel;
use crate::prediction::in_flight::InFlightRequests;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The remote model. `LlmClient` in production.
    pub llm: Arc<dyn LanguageModel>,
    /// Dashboard, leaderboard and form defaults, loaded once at startup.
    pub sample_data: Arc<SampleData>,
    /// Company highlighted on the leaderboard.
    pub current_company: String,
    pub in_flight: InFlightRequests,
}
