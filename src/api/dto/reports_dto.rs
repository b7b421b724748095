//! Report DTOs: performance, compliance, and tax.

use serde::Serialize;
use utoipa::ToSchema;

/// Return of a single holding over the report period.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SymbolReturn {
    /// Ticker symbol.
    pub symbol: String,
    /// Period return in percent.
    #[serde(rename = "return")]
    pub return_pct: f64,
}

/// Response for `GET /api/reports/performance`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PerformanceReport {
    /// Reporting period label.
    pub period: String,
    /// Portfolio return in percent.
    pub total_return: f64,
    /// Benchmark return in percent.
    pub benchmark_return: f64,
    /// Excess return over the benchmark, in percent.
    pub alpha: f64,
    /// Sensitivity to the benchmark.
    pub beta: f64,
    /// Risk-adjusted return.
    pub sharpe_ratio: f64,
    /// Largest peak-to-trough decline in percent.
    pub max_drawdown: f64,
    /// Annualised volatility in percent.
    pub volatility: f64,
    /// Best holdings, best first.
    pub top_performers: Vec<SymbolReturn>,
    /// Worst holdings, worst first.
    pub bottom_performers: Vec<SymbolReturn>,
}

/// Outcome of a compliance check.
#[derive(Debug, Clone, Copy, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceStatus {
    /// No findings.
    Compliant,
    /// Findings that need follow-up.
    Warning,
}

/// One compliance area.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ComplianceCheck {
    /// Area under review.
    pub category: String,
    /// Check outcome.
    pub status: ComplianceStatus,
    /// Score out of 100.
    pub score: u8,
    /// Date of the last review (`YYYY-MM-DD`).
    #[serde(rename = "lastCheck")]
    pub last_check: String,
}

/// Response for `GET /api/reports/compliance`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ComplianceReport {
    /// One entry per area.
    pub compliance: Vec<ComplianceCheck>,
}

/// Taxable income of one kind.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TaxLine {
    /// Income kind.
    pub category: String,
    /// Gross amount.
    pub amount: u64,
    /// Tax due.
    pub tax: u64,
    /// Rate in percent.
    pub rate: u8,
}

/// Response for `GET /api/reports/tax`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TaxReport {
    /// One line per income kind.
    pub tax_data: Vec<TaxLine>,
}
