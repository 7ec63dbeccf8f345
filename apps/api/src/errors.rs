use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// A single rejected form field, surfaced next to the offending input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// `Json` extractor whose rejections use the `AppError` envelope instead of
/// axum's plain-text bodies.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {} field(s) rejected", .0.len())]
    InvalidInput(Vec<FieldError>),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("A request is already in flight for client {0}")]
    RequestInFlight(String),

    #[error("Prediction failed: {0}")]
    Prediction(LlmError),

    #[error("Report generation failed: {0}")]
    Report(LlmError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::InvalidInput(fields) => {
                let body = Json(json!({
                    "error": {
                        "code": "VALIDATION_ERROR",
                        "message": "One or more fields are invalid",
                        "fields": fields,
                    }
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::MalformedBody(reason) => {
                let body = Json(json!({
                    "error": {
                        "code": "VALIDATION_ERROR",
                        "message": format!("Request body is not a valid form: {reason}"),
                        "fields": [],
                    }
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::RequestInFlight(_) => (
                StatusCode::CONFLICT,
                "REQUEST_IN_FLIGHT",
                "A request is already being processed. Wait for it to finish.".to_string(),
            ),
            AppError::Prediction(e) => {
                tracing::error!("Prediction error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "PREDICTION_FAILED",
                    "Could not generate carbon footprint prediction. Please try again."
                        .to_string(),
                )
            }
            AppError::Report(e) => {
                tracing::error!("Report error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "REPORT_FAILED",
                    "Could not generate the environmental report. Please try again.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
