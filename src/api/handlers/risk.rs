//! Risk handlers: value-at-risk and stress tests.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{StressTestReport, ValueAtRisk};
use crate::app_state::AppState;

/// `GET /api/risk/var`: Value at risk.
#[utoipa::path(
    get,
    path = "/api/risk/var",
    tag = "Risk",
    summary = "Value at risk",
    description = "Daily, weekly and monthly VaR at 95 % and 99 % plus the daily VaR curve.",
    responses(
        (status = 200, description = "VaR figures", body = ValueAtRisk),
    )
)]
pub async fn value_at_risk(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.market_data.value_at_risk()))
}

/// `GET /api/risk/stress-test`: Stress test.
#[utoipa::path(
    get,
    path = "/api/risk/stress-test",
    tag = "Risk",
    summary = "Stress test",
    description = "Portfolio impact of predefined market scenarios.",
    responses(
        (status = 200, description = "Scenario impacts", body = StressTestReport),
    )
)]
pub async fn stress_test(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.market_data.stress_test()))
}

/// Risk routes, relative to `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/risk/var", get(value_at_risk))
        .route("/risk/stress-test", get(stress_test))
}
