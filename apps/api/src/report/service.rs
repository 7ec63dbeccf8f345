//! Report generation: one model call, schema-checked, no partial results.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::{AppError, FieldError};
use crate::llm_client::{call_json, prompts::consultant_system, LanguageModel, LlmError};
use crate::prediction::validation::{build_input, validate_input, PredictionForm};
use crate::report::models::{ReportInput, ReportOutput};
use crate::report::prompts::build_report_prompt;

pub const COMPANY_NAME: &str = "companyName";
pub const REPORTING_PERIOD: &str = "reportingPeriod";

/// Raw report form: company, period and the same metrics as a prediction.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportForm {
    pub company_name: Option<Value>,
    pub reporting_period: Option<Value>,
    #[serde(flatten)]
    pub metrics: PredictionForm,
}

pub fn build_report_input(form: &ReportForm) -> Result<ReportInput, Vec<FieldError>> {
    let mut errors = Vec::new();

    let company_name = text_field(COMPANY_NAME, "Company name", form.company_name.as_ref(), &mut errors);
    let reporting_period = text_field(
        REPORTING_PERIOD,
        "Reporting period",
        form.reporting_period.as_ref(),
        &mut errors,
    );

    let metrics = match build_input(&form.metrics) {
        Ok(m) => Some(m),
        Err(metric_errors) => {
            errors.extend(metric_errors);
            None
        }
    };

    match (company_name, reporting_period, metrics) {
        (Some(company_name), Some(reporting_period), Some(metrics)) => Ok(ReportInput {
            company_name,
            reporting_period,
            metrics,
        }),
        _ => Err(errors),
    }
}

/// Loose form value to text. Only JSON strings are accepted.
fn text_field(
    field: &str,
    label: &str,
    value: Option<&Value>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        None | Some(Value::Null) => required_text(field, label, None, errors),
        Some(Value::String(s)) => required_text(field, label, Some(s.as_str()), errors),
        Some(_) => {
            errors.push(FieldError::new(field, format!("{label} must be text")));
            None
        }
    }
}

fn required_text(
    field: &str,
    label: &str,
    value: Option<&str>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => Some(v.to_string()),
        None => {
            errors.push(FieldError::new(field, format!("{label} is required")));
            None
        }
    }
}

pub async fn generate_report(
    model: &dyn LanguageModel,
    input: &ReportInput,
    today: NaiveDate,
) -> Result<ReportOutput, AppError> {
    let mut errors = Vec::new();
    required_text(COMPANY_NAME, "Company name", Some(input.company_name.as_str()), &mut errors);
    required_text(
        REPORTING_PERIOD,
        "Reporting period",
        Some(input.reporting_period.as_str()),
        &mut errors,
    );
    if let Err(metric_errors) = validate_input(&input.metrics) {
        errors.extend(metric_errors);
    }
    if !errors.is_empty() {
        return Err(AppError::InvalidInput(errors));
    }

    let request_id = Uuid::new_v4();
    info!(%request_id, company = %input.company_name, "Generating environmental report");

    let prompt = build_report_prompt(input, today);
    let report = request_report(model, &prompt).await.map_err(|e| {
        warn!(%request_id, "Report rejected: {e}");
        AppError::Report(e)
    })?;

    info!(
        %request_id,
        sources = report.carbon_emission_breakdown.source_data.len(),
        "Report complete"
    );
    Ok(report)
}

async fn request_report(model: &dyn LanguageModel, prompt: &str) -> Result<ReportOutput, LlmError> {
    let report: ReportOutput = call_json(model, prompt, &consultant_system()).await?;
    report.check_shape()?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::llm_client::testing::ScriptedModel;

    fn form(value: serde_json::Value) -> ReportForm {
        serde_json::from_value(value).unwrap()
    }

    fn valid_form() -> serde_json::Value {
        json!({
            "companyName": "EcoCorp Inc.",
            "reportingPeriod": "Last 6 Months (January 2024 - June 2024)",
            "energyConsumption": 10000,
            "travelDistance": 5000,
            "wasteGeneration": 2000,
            "companySize": 50,
            "currentRecyclingRate": 70,
            "currentRenewableEnergyMix": 65
        })
    }

    fn model_reply(source_count: usize) -> String {
        let sources: Vec<_> = (0..source_count)
            .map(|i| json!({"name": format!("Source {i}"), "value": 10.0, "percentage": 100.0 / source_count as f64}))
            .collect();
        json!({
            "reportTitle": "Environmental Impact Report for EcoCorp Inc.",
            "generatedDate": "2024-07-04",
            "periodCovered": "Last 6 Months (January 2024 - June 2024)",
            "executiveSummary": "Steady progress.",
            "keyMetricsTrendAnalysis": {
                "carbonFootprint": "Declining.",
                "energyConsumption": "Flat.",
                "waterUsage": "Declining.",
                "wasteGeneration": "Flat."
            },
            "carbonEmissionBreakdown": {
                "analysisText": "Energy is the main cause.",
                "sourceData": sources
            },
            "aiInsightsAndRecommendations": {
                "currentAssessment": "Low",
                "positiveRemarks": ["A 70% recycling rate is excellent."]
            },
            "futureOutlookProjection": "Stable."
        })
        .to_string()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 4).unwrap()
    }

    #[test]
    fn test_form_builds_input() {
        let input = build_report_input(&form(valid_form())).unwrap();
        assert_eq!(input.company_name, "EcoCorp Inc.");
        assert_eq!(input.metrics.current_renewable_energy_mix, Some(65.0));
    }

    #[test]
    fn test_form_reports_text_and_metric_errors_together() {
        let mut body = valid_form();
        body["companyName"] = json!("  ");
        body["companySize"] = json!(0);
        let errors = build_report_input(&form(body)).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec![COMPANY_NAME, "companySize"]);
    }

    #[test]
    fn test_non_text_company_fields_are_field_errors() {
        let mut body = valid_form();
        body["companyName"] = json!(123);
        body["reportingPeriod"] = json!(["H1"]);
        let errors = build_report_input(&form(body)).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec![COMPANY_NAME, REPORTING_PERIOD]);
        assert_eq!(errors[0].message, "Company name must be text");
    }

    #[tokio::test]
    async fn test_report_generated() {
        let model = ScriptedModel::replying(model_reply(3));
        let input = build_report_input(&form(valid_form())).unwrap();
        let report = generate_report(&model, &input, today()).await.unwrap();
        assert_eq!(report.carbon_emission_breakdown.source_data.len(), 3);
        assert!(model.last_prompt().unwrap().contains("2024-07-04"));
    }

    #[tokio::test]
    async fn test_bad_breakdown_is_a_failure() {
        let model = ScriptedModel::replying(model_reply(2));
        let input = build_report_input(&form(valid_form())).unwrap();
        let err = generate_report(&model, &input, today()).await.unwrap_err();
        assert!(matches!(err, AppError::Report(LlmError::Schema(_))));
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_model() {
        let model = ScriptedModel::replying(model_reply(3));
        let mut input = build_report_input(&form(valid_form())).unwrap();
        input.metrics.waste_generation = -3.0;
        let err = generate_report(&model, &input, today()).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(model.calls(), 0);
    }
}
