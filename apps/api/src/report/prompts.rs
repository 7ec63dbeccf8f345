// Comprehensive report prompt templates.

use chrono::NaiveDate;

use crate::llm_client::prompts::{format_number, render};
use crate::prediction::models::PredictionInput;
use crate::prediction::prompts::render_metrics;
use crate::report::models::ReportInput;

/// Report prompt template.
/// Replace: {company_name}, {reporting_period}, {metrics}, {generated_date}, {annual_estimate}
pub const REPORT_PROMPT_TEMPLATE: &str = r#"Generate a comprehensive environmental impact report for {company_name} covering the period: {reporting_period}.

Current operational data:
{metrics}

Based on this data and general environmental knowledge, produce:

1. Report meta: `reportTitle` = "Environmental Impact Report for {company_name}", `generatedDate` = "{generated_date}", `periodCovered` = "{reporting_period}".
2. `executiveSummary`: a 3-4 sentence overview of environmental performance, naming areas of concern and areas of strength.
3. `keyMetricsTrendAnalysis`: 2-3 sentences each for `carbonFootprint`, `energyConsumption`, `waterUsage` and `wasteGeneration`, discussing likely trends over the period. If current figures are high or low for the company size, infer that this has likely been a trend.
4. `carbonEmissionBreakdown` (the most important section):
    - `analysisText`: 4-5 sentences identifying the primary emission sources, clearly stating the main cause(s) and why they are significant for this company profile.
    - `sourceData`: 3-5 items for a pie chart, each with `name` (short, e.g. "Energy Consumption", "Business Travel", "Waste Disposal", "General Operations"), `value` (estimated annual tons CO2e) and `percentage` (0-100). Percentages should sum to roughly 100.
5. `aiInsightsAndRecommendations`:
    - `currentAssessment`: "Very High", "High", "Moderate", "Low" or "Very Low".
    - `improvementAdvice` (2-4 items): only if the assessment is "High" or "Moderate"; focus on the main emission sources.
    - `positiveRemarks` (1-3 items): only if the assessment is "Low" or there are commendable inputs such as a high recycling rate or renewable mix.
6. `futureOutlookProjection`: 2-3 sentences on a conceptual 6-month projection. Suggest a slight decrease if advice was given, or a stable or slightly improving trend if performance is already good.

Assume a standard office-based or light service industry profile unless the inputs strongly suggest otherwise.
A rough annual footprint to distribute among sources is {annual_estimate} tons CO2e. Use your expert judgment for plausible values.

Return a JSON object with this EXACT schema:
{
  "reportTitle": "string",
  "generatedDate": "YYYY-MM-DD",
  "periodCovered": "string",
  "executiveSummary": "string",
  "keyMetricsTrendAnalysis": {
    "carbonFootprint": "string",
    "energyConsumption": "string",
    "waterUsage": "string",
    "wasteGeneration": "string"
  },
  "carbonEmissionBreakdown": {
    "analysisText": "string",
    "sourceData": [{ "name": "Energy Consumption", "value": 60.0, "percentage": 55 }]
  },
  "aiInsightsAndRecommendations": {
    "currentAssessment": "Moderate",
    "improvementAdvice": ["string"],
    "positiveRemarks": ["string"]
  },
  "futureOutlookProjection": "string"
}
Omit `improvementAdvice` or `positiveRemarks` when they do not apply."#;

// tons CO2e per unit of monthly input
const ENERGY_FACTOR: f64 = 0.0005;
const TRAVEL_FACTOR: f64 = 0.0002;
const WASTE_FACTOR: f64 = 0.001;

/// Rough annual footprint in tons CO2e. Guidance for the model only; never
/// compared against its output.
pub fn rough_annual_footprint(metrics: &PredictionInput) -> f64 {
    let monthly = metrics.energy_consumption * ENERGY_FACTOR
        + metrics.travel_distance * TRAVEL_FACTOR
        + metrics.waste_generation * WASTE_FACTOR;
    (monthly * 12.0 * 10.0).round() / 10.0
}

pub fn build_report_prompt(input: &ReportInput, today: NaiveDate) -> String {
    render(
        REPORT_PROMPT_TEMPLATE,
        &[
            ("company_name", input.company_name.clone()),
            ("reporting_period", input.reporting_period.clone()),
            ("metrics", render_metrics(&input.metrics)),
            ("generated_date", today.format("%Y-%m-%d").to_string()),
            (
                "annual_estimate",
                format_number(rough_annual_footprint(&input.metrics)),
            ),
        ],
    )
}
