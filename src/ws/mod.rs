//! WebSocket layer: upgrade handling and the per-connection streaming
//! session.
//!
//! The endpoint at `/ws` pushes a `market_update` message on every feed
//! interval until the client goes away.

pub mod handler;
pub mod session;
pub mod sink;

pub use session::StreamSettings;
pub use sink::WsSink;
