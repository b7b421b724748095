//! Axum WebSocket upgrade handler.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::ws::WebSocketUpgrade;
use axum::response::IntoResponse;

use super::session::run_session;
use crate::app_state::AppState;
use crate::error::StreamError;

/// `GET /ws`: Upgrade HTTP connection to WebSocket.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    let registry = Arc::clone(&state.registry);
    let settings = state.stream;

    ws.on_failed_upgrade(|err: axum::Error| {
        let err = StreamError::AcceptFailure(err.to_string());
        tracing::warn!(error = %err, "ws session not started");
    })
    .on_upgrade(move |socket| run_session(socket, registry, settings))
}
