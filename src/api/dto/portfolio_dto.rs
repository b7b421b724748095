//! Portfolio DTOs: overview, allocation, and performance history.

use serde::Serialize;
use utoipa::ToSchema;

/// Response for `GET /api/portfolio/overview`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PortfolioOverview {
    /// Cash plus invested value.
    pub total_value: u64,
    /// Absolute change since the previous close.
    pub daily_change: i64,
    /// Relative daily change in percent.
    pub daily_change_percent: f64,
    /// Absolute change over the last month.
    pub monthly_change: i64,
    /// Relative monthly change in percent.
    pub monthly_change_percent: f64,
    /// Absolute change over the last year.
    pub yearly_change: i64,
    /// Relative yearly change in percent.
    pub yearly_change_percent: f64,
    /// Uninvested cash.
    pub cash: u64,
    /// Market value of open positions.
    pub invested: u64,
    /// Profit and loss on open positions.
    pub unrealized_pnl: i64,
    /// Profit and loss on closed positions.
    pub realized_pnl: i64,
}

/// One asset class in the allocation breakdown.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AllocationSlice {
    /// Market value of the asset class.
    pub value: u64,
    /// Share of the total portfolio in percent.
    pub percentage: f64,
    /// Absolute daily change.
    pub change: i64,
    /// Relative daily change in percent.
    pub change_percent: f64,
}

/// Response for `GET /api/portfolio/allocation`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AssetAllocation {
    /// Equities.
    pub stocks: AllocationSlice,
    /// Fixed income.
    pub bonds: AllocationSlice,
    /// Exchange-traded funds.
    pub etfs: AllocationSlice,
    /// Everything else.
    pub alternatives: AllocationSlice,
}

/// Response for `GET /api/portfolio/performance`.
///
/// The three vectors are index-aligned, oldest day first.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PerformanceHistory {
    /// Calendar days as `YYYY-MM-DD`.
    pub dates: Vec<String>,
    /// Portfolio value at each day's close.
    pub values: Vec<f64>,
    /// Benchmark value at each day's close.
    pub benchmark: Vec<f64>,
}
