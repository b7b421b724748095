//! REST endpoint handlers organized by topic.

pub mod analytics;
pub mod portfolio;
pub mod reports;
pub mod risk;
pub mod system;
pub mod trading;

use axum::Router;

use crate::app_state::AppState;

/// Composes all topic routes under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(portfolio::routes())
        .merge(risk::routes())
        .merge(trading::routes())
        .merge(analytics::routes())
        .merge(reports::routes())
}
