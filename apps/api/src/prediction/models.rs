use serde::{Deserialize, Serialize};

use crate::llm_client::LlmError;

/// Number of monthly points the model must return in a projection.
pub const PROJECTION_MONTHS: usize = 6;

/// Validated operational metrics for one prediction request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionInput {
    /// kWh per month.
    pub energy_consumption: f64,
    /// km per month.
    pub travel_distance: f64,
    /// kg per month.
    pub waste_generation: f64,
    /// Number of employees.
    pub company_size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_recycling_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_renewable_energy_mix: Option<f64>,
}

/// One month of the forward projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthProjection {
    pub month_name: String,
    /// tons CO2e
    pub projected_footprint: f64,
}

/// The model's prediction, accepted only when the whole schema is satisfied.
///
/// `projected_annual_footprint` is taken as given; it is never recomputed from
/// the monthly figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionOutput {
    /// tons CO2e
    pub predicted_monthly_footprint: f64,
    pub footprint_assessment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvement_advice: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positive_remarks: Option<Vec<String>>,
    pub projected_annual_footprint: f64,
    pub six_month_footprint_projection: Vec<MonthProjection>,
}

impl PredictionOutput {
    /// Checks the parts of the schema serde cannot express.
    pub fn check_shape(&self) -> Result<(), LlmError> {
        let n = self.six_month_footprint_projection.len();
        if n != PROJECTION_MONTHS {
            return Err(LlmError::Schema(format!(
                "sixMonthFootprintProjection must have exactly {PROJECTION_MONTHS} entries, got {n}"
            )));
        }
        Ok(())
    }

    pub fn assessment_tier(&self) -> AssessmentTier {
        AssessmentTier::classify(&self.footprint_assessment)
    }
}

/// Coarse grouping of the free-text assessment label, for colour-coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentTier {
    /// "Very High" or "High"
    Concern,
    /// "Moderate"
    Caution,
    /// "Low" or "Very Low"
    Positive,
    Unknown,
}

impl AssessmentTier {
    pub fn classify(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "very high" | "high" => AssessmentTier::Concern,
            "moderate" => AssessmentTier::Caution,
            "low" | "very low" => AssessmentTier::Positive,
            _ => AssessmentTier::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_with_months(n: usize) -> PredictionOutput {
        PredictionOutput {
            predicted_monthly_footprint: 10.0,
            footprint_assessment: "Moderate".to_string(),
            improvement_advice: None,
            positive_remarks: None,
            projected_annual_footprint: 120.0,
            six_month_footprint_projection: (0..n)
                .map(|i| MonthProjection {
                    month_name: format!("M{i}"),
                    projected_footprint: 10.0,
                })
                .collect(),
        }
    }

    #[test]
    fn test_shape_accepts_six_months() {
        assert!(output_with_months(6).check_shape().is_ok());
    }

    #[test]
    fn test_shape_rejects_wrong_length() {
        assert!(matches!(
            output_with_months(5).check_shape(),
            Err(LlmError::Schema(_))
        ));
        assert!(output_with_months(7).check_shape().is_err());
    }

    #[test]
    fn test_missing_required_field_fails_to_parse() {
        let json = r#"{
            "predictedMonthlyFootprint": 4.2,
            "footprintAssessment": "Low",
            "sixMonthFootprintProjection": []
        }"#;
        assert!(serde_json::from_str::<PredictionOutput>(json).is_err());
    }

    #[test]
    fn test_optional_lists_default_to_none() {
        let json = r#"{
            "predictedMonthlyFootprint": 4.2,
            "footprintAssessment": "Low",
            "projectedAnnualFootprint": 50.4,
            "sixMonthFootprintProjection": []
        }"#;
        let out: PredictionOutput = serde_json::from_str(json).unwrap();
        assert!(out.improvement_advice.is_none());
        assert!(out.positive_remarks.is_none());
    }

    #[test]
    fn test_assessment_tier_is_case_insensitive() {
        assert_eq!(AssessmentTier::classify("VERY HIGH"), AssessmentTier::Concern);
        assert_eq!(AssessmentTier::classify(" moderate "), AssessmentTier::Caution);
        assert_eq!(AssessmentTier::classify("Very Low"), AssessmentTier::Positive);
        assert_eq!(AssessmentTier::classify("Excellent"), AssessmentTier::Unknown);
    }

    #[test]
    fn test_input_omits_absent_optionals_on_the_wire() {
        let input = PredictionInput {
            energy_consumption: 1.0,
            travel_distance: 2.0,
            waste_generation: 3.0,
            company_size: 4,
            current_recycling_rate: None,
            current_renewable_energy_mix: None,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("currentRecyclingRate").is_none());
        assert_eq!(json["companySize"], 4);
    }
}
