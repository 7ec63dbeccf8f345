// Carbon footprint prediction prompt templates.
// The behavioural rules below are expectations of the remote model; the service
// only validates the response shape.

use chrono::{Datelike, Month, NaiveDate};

use crate::llm_client::prompts::{format_number, render};
use crate::prediction::models::{PredictionInput, PROJECTION_MONTHS};

/// Prediction prompt template.
/// Replace: {metrics}, {current_period}, {projection_months}
pub const PREDICTION_PROMPT_TEMPLATE: &str = r#"Based on the provided current monthly operational data and dashboard metrics for a company, you need to:
1. Calculate the `predictedMonthlyFootprint` in tons of CO2 equivalent.
2. Provide a `footprintAssessment` (one of "Very High", "High", "Moderate", "Low", "Very Low") for this monthly footprint. Consider the company size and the other metrics, including recycling rate and renewable energy mix when given, against typical benchmarks for an office-based business or light manufacturing.
3. Based on the assessment and all input values:
    - If the assessment is "Very High", "High" or "Moderate", or specific inputs look notably high or low for the company size, provide 3-5 specific, practical `improvementAdvice` points, most impactful first. Reference the recycling rate and renewable energy mix when given.
    - If the assessment is "Low" or "Very Low" and the inputs indicate good practices, provide 1-3 concise `positiveRemarks` that name what the company does well, referencing the metrics when given.
4. Calculate `projectedAnnualFootprint` as predictedMonthlyFootprint * 12.
5. Generate `sixMonthFootprintProjection` with exactly 6 items. The current data covers {current_period}; the projection covers these months in order: {projection_months}. Each item has `monthName` (full month name) and `projectedFootprint` (tons CO2e).
    - If advice is given, show a gradual decrease of 0.5-2% per month, assuming the advice starts to be implemented.
    - If positive remarks are given, show a stable footprint or a 0-0.5% monthly decrease.
    - If the assessment is "Moderate" with no strong advice, keep the footprint relatively stable.

Company operational and dashboard data:
{metrics}

Return a JSON object with this EXACT schema:
{
  "predictedMonthlyFootprint": 10.5,
  "footprintAssessment": "Moderate",
  "improvementAdvice": ["Invest in smart thermostats to optimize HVAC energy use, potentially saving 5-10% on heating and cooling."],
  "positiveRemarks": ["Maintaining low travel distances per employee significantly contributes to your footprint."],
  "projectedAnnualFootprint": 126.0,
  "sixMonthFootprintProjection": [
    { "monthName": "August", "projectedFootprint": 10.4 }
  ]
}
Omit `improvementAdvice` or `positiveRemarks` when they do not apply. Avoid conversational fluff."#;

/// Renders the operational data block, listing optional metrics only when present.
pub fn render_metrics(input: &PredictionInput) -> String {
    let mut lines = vec![
        format!(
            "- Monthly energy consumption: {} kWh",
            format_number(input.energy_consumption)
        ),
        format!(
            "- Monthly travel distance: {} km",
            format_number(input.travel_distance)
        ),
        format!(
            "- Monthly waste generation: {} kg",
            format_number(input.waste_generation)
        ),
        format!("- Number of employees: {}", input.company_size),
    ];
    if let Some(rate) = input.current_recycling_rate {
        lines.push(format!("- Current Recycling Rate: {}%", format_number(rate)));
    }
    if let Some(mix) = input.current_renewable_energy_mix {
        lines.push(format!(
            "- Current Renewable Energy Mix: {}%",
            format_number(mix)
        ));
    }
    lines.join("\n")
}

/// The just-ended month as "Month YYYY", followed by the names of the six
/// months the projection must cover.
pub fn projection_calendar(today: NaiveDate) -> (String, Vec<&'static str>) {
    let this_month = today.month0();
    let (period_month0, period_year) = if this_month == 0 {
        (11, today.year() - 1)
    } else {
        (this_month - 1, today.year())
    };
    let current_period = format!("{} {}", month_name(period_month0), period_year);

    let months = (0..PROJECTION_MONTHS as u32)
        .map(|offset| month_name((this_month + offset) % 12))
        .collect();
    (current_period, months)
}

fn month_name(month0: u32) -> &'static str {
    // month0 is always reduced mod 12, so the conversion cannot fail
    Month::try_from((month0 % 12 + 1) as u8)
        .map(|m| m.name())
        .unwrap_or("January")
}

pub fn build_prediction_prompt(input: &PredictionInput, today: NaiveDate) -> String {
    let (current_period, months) = projection_calendar(today);
    render(
        PREDICTION_PROMPT_TEMPLATE,
        &[
            ("metrics", render_metrics(input)),
            ("current_period", current_period),
            ("projection_months", months.join(", ")),
        ],
    )
}
