pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::dashboard::handle_dashboard;
use crate::leaderboard::handle_leaderboard;
use crate::prediction::handlers::{handle_predict, handle_prediction_defaults};
use crate::report::handlers::handle_generate_report;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/dashboard", get(handle_dashboard))
        .route("/api/v1/leaderboard", get(handle_leaderboard))
        .route("/api/v1/predictions", post(handle_predict))
        .route(
            "/api/v1/predictions/defaults",
            get(handle_prediction_defaults),
        )
        .route("/api/v1/reports", post(handle_generate_report))
        .with_state(state)
}
