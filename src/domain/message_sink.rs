//! Outbound half of a duplex connection.

use std::future::Future;

/// Write side of one accepted duplex connection.
///
/// The registry only ever pushes text frames, so this is the whole
/// transport contract it needs. The WebSocket implementation lives in
/// [`crate::ws::sink`]; tests substitute in-memory sinks.
pub trait MessageSink: Send + 'static {
    /// Transport-level failure, e.g. the peer already closed.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Writes one UTF-8 text message and waits until it is flushed.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` when the transport rejects the write.
    fn send_text(&mut self, text: String) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
