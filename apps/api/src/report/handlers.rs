//! Axum route handlers for the Report API.

use axum::{extract::State, http::HeaderMap, Json};
use chrono::Utc;

use crate::errors::{ApiJson, AppError};
use crate::prediction::handlers::claim_client;
use crate::prediction::in_flight::RequestKind;
use crate::report::models::ReportOutput;
use crate::report::service::{build_report_input, generate_report, ReportForm};
use crate::state::AppState;

/// POST /api/v1/reports
pub async fn handle_generate_report(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(form): ApiJson<ReportForm>,
) -> Result<Json<ReportOutput>, AppError> {
    let input = build_report_input(&form).map_err(AppError::InvalidInput)?;
    let _busy = claim_client(&state, &headers, RequestKind::Report)?;

    let today = Utc::now().date_naive();
    let report = generate_report(state.llm.as_ref(), &input, today).await?;
    Ok(Json(report))
}
