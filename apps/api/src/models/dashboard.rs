use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub name: String,
    pub slogan: String,
    pub avatar_url: String,
    pub avatar_fallback: String,
}

/// A headline metric as stored in fixtures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpi {
    pub title: String,
    pub value: f64,
    pub unit: String,
    /// Signed change against last month, in percent.
    pub change_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyCarbonPoint {
    pub month: String,
    /// tons CO2e
    pub footprint: f64,
    /// tons CO2
    pub co2: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyUtilityPoint {
    pub month: String,
    /// m³
    pub water: f64,
    /// kWh
    pub electricity: f64,
}

/// Air or water quality index shown as a half-circle gauge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gauge {
    pub name: String,
    pub value: f64,
    pub max: f64,
}
