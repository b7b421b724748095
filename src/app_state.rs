//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::domain::ConnectionRegistry;
use crate::service::MarketDataProvider;
use crate::ws::{StreamSettings, WsSink};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Open streaming connections.
    pub registry: Arc<ConnectionRegistry<WsSink>>,
    /// Documents served by the `/api` endpoints.
    pub market_data: Arc<MarketDataProvider>,
    /// Feed interval and mode for streaming sessions.
    pub stream: StreamSettings,
}

impl AppState {
    /// Builds the state for a fresh process: an empty registry and a
    /// newly sampled data provider.
    #[must_use]
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            registry: Arc::new(ConnectionRegistry::new()),
            market_data: Arc::new(MarketDataProvider::new(&mut rand::rng())),
            stream: StreamSettings::from(config),
        }
    }
}
