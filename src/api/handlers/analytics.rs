//! Analytics handlers: sentiment, predictions, insights, and model metrics.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{
    InsightFeed, MarketOutlook, MarketPredictions, MarketSentiment, ModelPerformance,
    SentimentBreakdown,
};
use crate::app_state::AppState;

/// `GET /api/analytics/market-sentiment`: Market sentiment.
#[utoipa::path(
    get,
    path = "/api/analytics/market-sentiment",
    tag = "Analytics",
    summary = "Market sentiment",
    description = "Overall and per-sector sentiment with trending topics.",
    responses(
        (status = 200, description = "Sentiment summary", body = MarketSentiment),
    )
)]
pub async fn market_sentiment(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.market_data.market_sentiment()))
}

/// `GET /api/analytics/predictions`: Market outlook.
#[utoipa::path(
    get,
    path = "/api/analytics/predictions",
    tag = "Analytics",
    summary = "Market outlook",
    description = "Predicted market direction with supporting and risk factors.",
    responses(
        (status = 200, description = "Outlook", body = MarketOutlook),
    )
)]
pub async fn market_outlook(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.market_data.market_outlook()))
}

/// `GET /api/analytics/market-predictions`: Market predictions.
#[utoipa::path(
    get,
    path = "/api/analytics/market-predictions",
    tag = "Analytics",
    summary = "Market predictions",
    description = "Predicted versus realised monthly returns.",
    responses(
        (status = 200, description = "Monthly predictions", body = MarketPredictions),
    )
)]
pub async fn market_predictions(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.market_data.market_predictions()))
}

/// `GET /api/analytics/sentiment`: Sentiment breakdown.
#[utoipa::path(
    get,
    path = "/api/analytics/sentiment",
    tag = "Analytics",
    summary = "Sentiment breakdown",
    description = "Positive, negative and neutral coverage per sector.",
    responses(
        (status = 200, description = "Sector breakdown", body = SentimentBreakdown),
    )
)]
pub async fn sentiment_breakdown(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.market_data.sentiment_breakdown()))
}

/// `GET /api/analytics/insights`: Model insights.
#[utoipa::path(
    get,
    path = "/api/analytics/insights",
    tag = "Analytics",
    summary = "Model insights",
    description = "Opportunities and risks flagged by the model.",
    responses(
        (status = 200, description = "Insight list", body = InsightFeed),
    )
)]
pub async fn insights(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.market_data.insights()))
}

/// `GET /api/analytics/performance`: Model performance.
#[utoipa::path(
    get,
    path = "/api/analytics/performance",
    tag = "Analytics",
    summary = "Model performance",
    description = "Accuracy, sentiment index, risk score and signal count.",
    responses(
        (status = 200, description = "Model metrics", body = ModelPerformance),
    )
)]
pub async fn model_performance(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.market_data.model_performance()))
}

/// Analytics routes, relative to `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/analytics/market-sentiment", get(market_sentiment))
        .route("/analytics/predictions", get(market_outlook))
        .route("/analytics/market-predictions", get(market_predictions))
        .route("/analytics/sentiment", get(sentiment_breakdown))
        .route("/analytics/insights", get(insights))
        .route("/analytics/performance", get(model_performance))
}
