//! Portfolio handlers: overview, allocation, and performance history.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{AssetAllocation, PerformanceHistory, PortfolioOverview};
use crate::app_state::AppState;

/// `GET /api/portfolio/overview`: Portfolio overview.
#[utoipa::path(
    get,
    path = "/api/portfolio/overview",
    tag = "Portfolio",
    summary = "Portfolio overview",
    description = "Current value, cash, invested capital and daily/monthly/yearly changes.",
    responses(
        (status = 200, description = "Portfolio overview", body = PortfolioOverview),
    )
)]
pub async fn portfolio_overview(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.market_data.portfolio_overview()))
}

/// `GET /api/portfolio/allocation`: Asset allocation.
#[utoipa::path(
    get,
    path = "/api/portfolio/allocation",
    tag = "Portfolio",
    summary = "Asset allocation",
    description = "Value, share and daily change per asset class.",
    responses(
        (status = 200, description = "Allocation by asset class", body = AssetAllocation),
    )
)]
pub async fn asset_allocation(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.market_data.asset_allocation()))
}

/// `GET /api/portfolio/performance`: Performance history.
#[utoipa::path(
    get,
    path = "/api/portfolio/performance",
    tag = "Portfolio",
    summary = "Performance history",
    description = "Thirty daily closes with a benchmark series, drawn once at startup.",
    responses(
        (status = 200, description = "Daily values and benchmark", body = PerformanceHistory),
    )
)]
pub async fn performance_history(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.market_data.performance_history()))
}

/// Portfolio routes, relative to `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/portfolio/overview", get(portfolio_overview))
        .route("/portfolio/allocation", get(asset_allocation))
        .route("/portfolio/performance", get(performance_history))
}
