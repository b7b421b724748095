//! # folio-gateway
//!
//! REST API and WebSocket gateway serving synthetic portfolio, risk,
//! trading, analytics and report data to dashboard frontends.
//!
//! Nothing is persisted and nothing is computed from real inputs: the
//! REST documents come from [`service::MarketDataProvider`], and the `/ws`
//! stream pushes freshly sampled market updates through the
//! [`domain::ConnectionRegistry`].
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP, WebSocket)
//!     │
//!     ├── REST Handlers (api/)          ── MarketDataProvider (service/)
//!     ├── WS Handler + Session (ws/)
//!     │       │
//!     │       └── ConnectionRegistry (domain/)
//!     │               ├── unicast  ── per-session feed
//!     │               └── broadcast ── shared feed (service/)
//!     │
//!     └── CORS + tracing (server)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod server;
pub mod service;
pub mod ws;
