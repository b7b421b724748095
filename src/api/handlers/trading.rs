//! Trading handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::TradingOrders;
use crate::app_state::AppState;

/// `GET /api/trading/orders`: Orders and trades.
#[utoipa::path(
    get,
    path = "/api/trading/orders",
    tag = "Trading",
    summary = "Orders and trades",
    description = "Pending orders and the most recent fills.",
    responses(
        (status = 200, description = "Orders and fills", body = TradingOrders),
    )
)]
pub async fn trading_orders(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.market_data.trading_orders()))
}

/// Trading routes, relative to `/api`.
pub fn routes() -> Router<AppState> {
    Router::new().route("/trading/orders", get(trading_orders))
}
