//! Axum route handlers for the Prediction API.

use axum::{extract::State, http::HeaderMap, Json};
use chrono::Utc;
use serde::Serialize;

use crate::errors::{ApiJson, AppError};
use crate::prediction::in_flight::{InFlightGuard, RequestKind, CLIENT_ID_HEADER};
use crate::prediction::models::{AssessmentTier, PredictionInput, PredictionOutput};
use crate::prediction::service::predict_footprint;
use crate::prediction::validation::{build_input, PredictionForm};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    #[serde(flatten)]
    pub prediction: PredictionOutput,
    pub assessment_tier: AssessmentTier,
}

/// POST /api/v1/predictions
///
/// Validates the form, then asks the model for a prediction. Field errors are
/// returned before any model call is made.
pub async fn handle_predict(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(form): ApiJson<PredictionForm>,
) -> Result<Json<PredictionResponse>, AppError> {
    let input = build_input(&form).map_err(AppError::InvalidInput)?;
    let _busy = claim_client(&state, &headers, RequestKind::Prediction)?;

    let today = Utc::now().date_naive();
    let prediction = predict_footprint(state.llm.as_ref(), &input, today).await?;
    Ok(Json(PredictionResponse {
        assessment_tier: prediction.assessment_tier(),
        prediction,
    }))
}

/// GET /api/v1/predictions/defaults
///
/// The sample values a fresh prediction form starts with.
pub async fn handle_prediction_defaults(State(state): State<AppState>) -> Json<PredictionInput> {
    Json(state.sample_data.prediction_defaults.clone())
}

/// Sets the busy flag for the submitting client, if it identified itself.
pub fn claim_client(
    state: &AppState,
    headers: &HeaderMap,
    kind: RequestKind,
) -> Result<Option<InFlightGuard>, AppError> {
    let Some(client_id) = headers
        .get(CLIENT_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
    else {
        return Ok(None);
    };

    state
        .in_flight
        .try_acquire(client_id, kind)
        .map(Some)
        .ok_or_else(|| AppError::RequestInFlight(client_id.to_string()))
}
