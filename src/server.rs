//! Router assembly and server startup.

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, Uri};
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::AppState;
use crate::config::{FeedMode, GatewayConfig};
use crate::error::GatewayError;
use crate::service::spawn_broadcast_feed;
use crate::ws::handler::ws_handler;

/// Builds the full application router: REST API, `/ws`, tracing and CORS.
pub fn build_app(state: AppState, config: &GatewayConfig) -> Router {
    let router = Router::new()
        .merge(api::build_router())
        .route("/ws", get(ws_handler));

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json")),
    );

    router
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(config.allowed_origins.clone())),
        )
        .with_state(state)
}

/// CORS policy: listed origins only, with credentials.
///
/// Wildcard methods and headers are not allowed together with
/// credentials, so both are mirrored from the preflight request instead.
#[must_use]
pub fn cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn not_found(uri: Uri) -> GatewayError {
    GatewayError::RouteNotFound(uri.path().to_string())
}

/// Binds the listener, starts the shared feed if configured, and serves
/// until the process exits.
///
/// # Errors
///
/// Returns an error if the listen address cannot be bound or the server
/// fails.
pub async fn serve(config: GatewayConfig) -> anyhow::Result<()> {
    let state = AppState::new(&config);

    if config.feed_mode == FeedMode::Broadcast {
        spawn_broadcast_feed(Arc::clone(&state.registry), config.update_interval);
    }

    let app = build_app(state, &config);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
