use serde::{Deserialize, Serialize};

use crate::llm_client::LlmError;
use crate::prediction::models::PredictionInput;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportInput {
    pub company_name: String,
    /// Free text, e.g. "Last 6 Months (January 2024 - June 2024)".
    pub reporting_period: String,
    #[serde(flatten)]
    pub metrics: PredictionInput,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendAnalysis {
    pub carbon_footprint: String,
    pub energy_consumption: String,
    pub water_usage: String,
    pub waste_generation: String,
}

/// One slice of the emission breakdown pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionSource {
    pub name: String,
    /// tons CO2e, annualized
    pub value: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionBreakdown {
    pub analysis_text: String,
    pub source_data: Vec<EmissionSource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub current_assessment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvement_advice: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positive_remarks: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOutput {
    pub report_title: String,
    /// YYYY-MM-DD
    pub generated_date: String,
    pub period_covered: String,
    pub executive_summary: String,
    pub key_metrics_trend_analysis: TrendAnalysis,
    pub carbon_emission_breakdown: EmissionBreakdown,
    pub ai_insights_and_recommendations: Insights,
    pub future_outlook_projection: String,
}

const SOURCES_MIN: usize = 3;
const SOURCES_MAX: usize = 5;

impl ReportOutput {
    /// Checks the list lengths and ranges serde cannot express.
    pub fn check_shape(&self) -> Result<(), LlmError> {
        let sources = &self.carbon_emission_breakdown.source_data;
        if !(SOURCES_MIN..=SOURCES_MAX).contains(&sources.len()) {
            return Err(LlmError::Schema(format!(
                "sourceData must have {SOURCES_MIN}-{SOURCES_MAX} entries, got {}",
                sources.len()
            )));
        }
        if let Some(bad) = sources
            .iter()
            .find(|s| !(0.0..=100.0).contains(&s.percentage))
        {
            return Err(LlmError::Schema(format!(
                "sourceData '{}' has percentage {} outside 0-100",
                bad.name, bad.percentage
            )));
        }

        let insights = &self.ai_insights_and_recommendations;
        check_len("improvementAdvice", insights.improvement_advice.as_deref(), 2, 4)?;
        check_len("positiveRemarks", insights.positive_remarks.as_deref(), 1, 3)?;
        Ok(())
    }
}

fn check_len(field: &str, items: Option<&[String]>, min: usize, max: usize) -> Result<(), LlmError> {
    match items {
        Some(list) if !(min..=max).contains(&list.len()) => Err(LlmError::Schema(format!(
            "{field} must have {min}-{max} entries when present, got {}",
            list.len()
        ))),
        _ => Ok(()),
    }
}
