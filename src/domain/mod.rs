//! Domain layer: connection identity, the connection registry, and the
//! streamed market update.
//!
//! The registry is transport-agnostic: it talks to connections through
//! the [`MessageSink`] trait, implemented for WebSockets in
//! [`crate::ws::sink`].

pub mod connection_id;
pub mod connection_registry;
pub mod market_update;
pub mod message_sink;

pub use connection_id::ConnectionId;
pub use connection_registry::{BroadcastReport, ConnectionRegistry};
pub use market_update::MarketUpdate;
pub use message_sink::MessageSink;
