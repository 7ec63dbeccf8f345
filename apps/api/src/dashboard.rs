//! Dashboard: KPI cards, monthly series and quality gauges from the sample data.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::fixtures::SampleData;
use crate::models::dashboard::{CompanyProfile, Kpi, MonthlyCarbonPoint, MonthlyUtilityPoint};
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn from_change(change_percent: f64) -> Self {
        if change_percent > 0.0 {
            Trend::Up
        } else if change_percent < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiCard {
    #[serde(flatten)]
    pub kpi: Kpi,
    pub trend: Trend,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeReading {
    pub name: String,
    pub value: f64,
    pub max: f64,
    /// value / max, clamped to 0..=1
    pub fill: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub company: CompanyProfile,
    pub kpis: Vec<KpiCard>,
    pub monthly_carbon: Vec<MonthlyCarbonPoint>,
    /// Percent change of the footprint from the first to the last month shown.
    pub carbon_period_change_percent: Option<f64>,
    pub monthly_utility: Vec<MonthlyUtilityPoint>,
    pub gauges: Vec<GaugeReading>,
}

pub fn build_dashboard(data: &SampleData) -> DashboardResponse {
    let kpis = data
        .kpis
        .iter()
        .map(|kpi| KpiCard {
            kpi: kpi.clone(),
            trend: Trend::from_change(kpi.change_percent),
        })
        .collect();

    let gauges = data
        .gauges
        .iter()
        .map(|g| GaugeReading {
            name: g.name.clone(),
            value: g.value,
            max: g.max,
            fill: (g.value / g.max).clamp(0.0, 1.0),
        })
        .collect();

    DashboardResponse {
        company: data.company.clone(),
        kpis,
        monthly_carbon: data.monthly_carbon.clone(),
        carbon_period_change_percent: period_change(&data.monthly_carbon),
        monthly_utility: data.monthly_utility.clone(),
        gauges,
    }
}

fn period_change(series: &[MonthlyCarbonPoint]) -> Option<f64> {
    let first = series.first()?.footprint;
    let last = series.last()?.footprint;
    if series.len() < 2 || first == 0.0 {
        return None;
    }
    Some(((last - first) / first * 1000.0).round() / 10.0)
}

/// GET /api/v1/dashboard
pub async fn handle_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    Json(build_dashboard(&state.sample_data))
}
