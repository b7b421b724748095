//! Risk DTOs: value-at-risk and stress scenarios.

use serde::Serialize;
use utoipa::ToSchema;

/// Response for `GET /api/risk/var`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValueAtRisk {
    /// One-day VaR at 95 % confidence.
    pub daily_var_95: u64,
    /// One-day VaR at 99 % confidence.
    pub daily_var_99: u64,
    /// One-week VaR at 95 % confidence.
    pub weekly_var_95: u64,
    /// One-week VaR at 99 % confidence.
    pub weekly_var_99: u64,
    /// One-month VaR at 95 % confidence.
    pub monthly_var_95: u64,
    /// One-month VaR at 99 % confidence.
    pub monthly_var_99: u64,
    /// Confidence levels of the daily VaR curve, in percent.
    pub confidence_levels: Vec<u8>,
    /// Daily VaR at each entry of `confidence_levels`.
    pub var_values: Vec<u64>,
}

/// Qualitative likelihood of a stress scenario.
#[derive(Debug, Clone, Copy, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Likelihood {
    /// Likely.
    High,
    /// Plausible.
    Medium,
    /// Unlikely.
    Low,
}

/// One stress test scenario.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StressScenario {
    /// Scenario name.
    pub name: String,
    /// Portfolio impact in percent.
    pub impact: f64,
    /// How likely the scenario is.
    pub probability: Likelihood,
}

/// Response for `GET /api/risk/stress-test`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StressTestReport {
    /// Evaluated scenarios.
    pub scenarios: Vec<StressScenario>,
    /// Largest loss across scenarios, in percent.
    pub worst_case: f64,
    /// Median scenario impact, in percent.
    pub expected_case: f64,
    /// Mildest expected outcome, in percent.
    pub best_case: f64,
}
