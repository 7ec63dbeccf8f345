//! Sample data served by the dashboard, leaderboard and prediction defaults.
//!
//! Loaded once at startup from `SAMPLE_DATA_PATH`, or from the bundled
//! `fixtures/sample_data.json` when no path is configured.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::models::dashboard::{CompanyProfile, Gauge, Kpi, MonthlyCarbonPoint, MonthlyUtilityPoint};
use crate::models::leaderboard::LeaderboardEntry;
use crate::prediction::models::PredictionInput;
use crate::prediction::validation::validate_input;

const BUILTIN_SAMPLE_DATA: &str = include_str!("../fixtures/sample_data.json");

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleData {
    pub company: CompanyProfile,
    pub kpis: Vec<Kpi>,
    pub monthly_carbon: Vec<MonthlyCarbonPoint>,
    pub monthly_utility: Vec<MonthlyUtilityPoint>,
    pub gauges: Vec<Gauge>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub prediction_defaults: PredictionInput,
}

impl SampleData {
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_SAMPLE_DATA).context("Bundled sample data is invalid")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read sample data from {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Invalid sample data in {}", path.display()))
    }

    /// Uses `path` when given, otherwise the bundled set.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let data = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::builtin()?,
        };
        info!(
            "Sample data loaded: {} KPIs, {} leaderboard entries",
            data.kpis.len(),
            data.leaderboard.len()
        );
        Ok(data)
    }

    fn parse(raw: &str) -> Result<Self> {
        let data: SampleData = serde_json::from_str(raw)?;
        data.check()?;
        Ok(data)
    }

    fn check(&self) -> Result<()> {
        if self.company.name.trim().is_empty() {
            bail!("company.name must not be empty");
        }
        if let Some(gauge) = self.gauges.iter().find(|g| g.max <= 0.0) {
            bail!("gauge '{}' must have a positive max", gauge.name);
        }
        if let Err(errors) = validate_input(&self.prediction_defaults) {
            let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
            bail!("predictionDefaults has invalid fields: {}", fields.join(", "));
        }
        Ok(())
    }
}
