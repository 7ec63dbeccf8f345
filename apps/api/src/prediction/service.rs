//! Prediction service adapter.
//!
//! Flow: validate_input → build prompt → one model call → parse → shape check.
//! Any failure after validation collapses into `AppError::Prediction`; a
//! partially-populated output is never returned.

use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::{call_json, prompts::consultant_system, LanguageModel, LlmError};
use crate::prediction::models::{PredictionInput, PredictionOutput};
use crate::prediction::prompts::build_prediction_prompt;
use crate::prediction::validation::validate_input;

pub async fn predict_footprint(
    model: &dyn LanguageModel,
    input: &PredictionInput,
    today: NaiveDate,
) -> Result<PredictionOutput, AppError> {
    validate_input(input).map_err(AppError::InvalidInput)?;

    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        company_size = input.company_size,
        "Requesting carbon footprint prediction"
    );

    let prompt = build_prediction_prompt(input, today);
    let output = request_prediction(model, &prompt).await.map_err(|e| {
        warn!(%request_id, "Prediction rejected: {e}");
        AppError::Prediction(e)
    })?;

    info!(
        %request_id,
        assessment = %output.footprint_assessment,
        monthly = output.predicted_monthly_footprint,
        "Prediction complete"
    );
    Ok(output)
}

async fn request_prediction(
    model: &dyn LanguageModel,
    prompt: &str,
) -> Result<PredictionOutput, LlmError> {
    let output: PredictionOutput = call_json(model, prompt, &consultant_system()).await?;
    output.check_shape()?;
    Ok(output)
}
