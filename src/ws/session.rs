//! Per-connection streaming session.
//!
//! A session registers the write half of its socket in the
//! [`ConnectionRegistry`], then either pushes its own updates
//! ([`FeedMode::Unicast`]) or just waits for the peer to leave while the
//! shared feed broadcasts ([`FeedMode::Broadcast`]). Deregistration is tied
//! to a drop guard, so it also happens when the task is cancelled.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::ws::{Message, WebSocket};
use futures_util::{Stream, StreamExt};

use super::sink::WsSink;
use crate::config::{FeedMode, GatewayConfig};
use crate::domain::{ConnectionId, ConnectionRegistry, MarketUpdate, MessageSink};
use crate::service::market_feed::update_ticker;

/// Streaming knobs shared by every session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSettings {
    /// Time between two updates.
    pub update_interval: Duration,
    /// Who produces the updates.
    pub feed_mode: FeedMode,
}

impl From<&GatewayConfig> for StreamSettings {
    fn from(config: &GatewayConfig) -> Self {
        Self {
            update_interval: config.update_interval,
            feed_mode: config.feed_mode,
        }
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Close frame received or the stream ended.
    ClientClosed,
    /// Reading from the socket failed.
    ReadFailed,
    /// Writing an update failed.
    DeliveryFailed,
}

impl fmt::Display for SessionEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::ClientClosed => "client closed",
            Self::ReadFailed => "read failed",
            Self::DeliveryFailed => "delivery failed",
        };
        f.write_str(reason)
    }
}

/// Keeps a connection registered for as long as it is alive.
struct Registration<S: MessageSink> {
    registry: Arc<ConnectionRegistry<S>>,
    id: ConnectionId,
}

impl<S: MessageSink> Registration<S> {
    fn new(registry: Arc<ConnectionRegistry<S>>, sink: S) -> Self {
        let id = registry.connect(sink);
        Self { registry, id }
    }
}

impl<S: MessageSink> Drop for Registration<S> {
    fn drop(&mut self) {
        self.registry.disconnect(self.id);
    }
}

/// Runs one streaming session until the peer goes away.
pub async fn run_session(
    socket: WebSocket,
    registry: Arc<ConnectionRegistry<WsSink>>,
    settings: StreamSettings,
) {
    let (ws_tx, ws_rx) = socket.split();
    drive_session(registry, ws_tx, ws_rx, settings).await;
}

/// Registers `sink`, feeds it according to `settings` while watching
/// `incoming` for the peer leaving, and deregisters it on the way out.
pub async fn drive_session<S, R>(
    registry: Arc<ConnectionRegistry<S>>,
    sink: S,
    mut incoming: R,
    settings: StreamSettings,
) -> SessionEnd
where
    S: MessageSink,
    R: Stream<Item = Result<Message, axum::Error>> + Unpin,
{
    let registration = Registration::new(registry, sink);
    let id = registration.id;
    tracing::info!(conn_id = %id, mode = ?settings.feed_mode, "ws session opened");

    let end = match settings.feed_mode {
        FeedMode::Unicast => {
            push_updates(&registration.registry, id, &mut incoming, settings.update_interval)
                .await
        }
        FeedMode::Broadcast => wait_for_close(&mut incoming).await,
    };

    drop(registration);
    tracing::info!(conn_id = %id, reason = %end, "ws session closed");
    end
}

/// Sends a freshly sampled update to `id` on every tick.
async fn push_updates<S, R>(
    registry: &ConnectionRegistry<S>,
    id: ConnectionId,
    incoming: &mut R,
    period: Duration,
) -> SessionEnd
where
    S: MessageSink,
    R: Stream<Item = Result<Message, axum::Error>> + Unpin,
{
    let mut ticker = update_ticker(period);

    loop {
        tokio::select! {
            msg = incoming.next() => {
                if let Some(end) = classify_incoming(msg) {
                    return end;
                }
            }
            _ = ticker.tick() => {
                let update = MarketUpdate::sample(&mut rand::rng());
                let payload = match update.to_json() {
                    Ok(payload) => payload,
                    Err(err) => {
                        tracing::error!(
                            conn_id = %id,
                            error = %err,
                            "failed to encode market update"
                        );
                        continue;
                    }
                };
                if let Err(err) = registry.unicast(&payload, id).await {
                    tracing::debug!(conn_id = %id, error = %err, "market update not delivered");
                    return SessionEnd::DeliveryFailed;
                }
            }
        }
    }
}

/// Drains the read half until the peer closes.
async fn wait_for_close<R>(incoming: &mut R) -> SessionEnd
where
    R: Stream<Item = Result<Message, axum::Error>> + Unpin,
{
    loop {
        if let Some(end) = classify_incoming(incoming.next().await) {
            return end;
        }
    }
}

/// Maps a read result to a session end, or `None` to keep going.
/// Client payloads carry no commands and are ignored.
fn classify_incoming(msg: Option<Result<Message, axum::Error>>) -> Option<SessionEnd> {
    match msg {
        Some(Ok(Message::Close(_))) | None => Some(SessionEnd::ClientClosed),
        Some(Err(err)) => {
            tracing::debug!(error = %err, "ws read failed");
            Some(SessionEnd::ReadFailed)
        }
        Some(Ok(_)) => None,
    }
}
