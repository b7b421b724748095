//! Report handlers: performance, compliance, and tax.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{ComplianceReport, PerformanceReport, TaxReport};
use crate::app_state::AppState;

/// `GET /api/reports/performance`: Performance report.
#[utoipa::path(
    get,
    path = "/api/reports/performance",
    tag = "Reports",
    summary = "Performance report",
    description = "Period return, risk ratios and best/worst holdings.",
    responses(
        (status = 200, description = "Performance report", body = PerformanceReport),
    )
)]
pub async fn performance_report(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.market_data.performance_report()))
}

/// `GET /api/reports/compliance`: Compliance report.
#[utoipa::path(
    get,
    path = "/api/reports/compliance",
    tag = "Reports",
    summary = "Compliance report",
    description = "Status and score per compliance area.",
    responses(
        (status = 200, description = "Compliance checks", body = ComplianceReport),
    )
)]
pub async fn compliance_report(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.market_data.compliance_report()))
}

/// `GET /api/reports/tax`: Tax report.
#[utoipa::path(
    get,
    path = "/api/reports/tax",
    tag = "Reports",
    summary = "Tax report",
    description = "Taxable income and tax due per income kind.",
    responses(
        (status = 200, description = "Tax lines", body = TaxReport),
    )
)]
pub async fn tax_report(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.market_data.tax_report()))
}

/// Reports routes, relative to `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports/performance", get(performance_report))
        .route("/reports/compliance", get(compliance_report))
        .route("/reports/tax", get(tax_report))
}
