//! Registry of open streaming connections with unicast and broadcast
//! delivery.
//!
//! [`ConnectionRegistry`] stores the outbound half of every accepted
//! connection in a [`DashMap`], each behind its own
//! [`tokio::sync::Mutex`]. Membership changes only lock one shard, and
//! writes to the same socket from a unicast and a broadcast are
//! serialized by the per-connection mutex.

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

use super::{ConnectionId, MessageSink};
use crate::error::StreamError;

type Handle<S> = Arc<Mutex<S>>;

/// Set of currently open duplex connections.
///
/// # Lifecycle
///
/// A connection is `OPEN` from [`connect`](Self::connect) until
/// [`disconnect`](Self::disconnect), after which its id is never reused.
/// Failed sends do not remove a connection; the owning session notices
/// the closure and deregisters itself.
pub struct ConnectionRegistry<S> {
    connections: DashMap<ConnectionId, Handle<S>>,
}

/// Outcome of a [`ConnectionRegistry::broadcast`] call.
#[derive(Debug, Default)]
pub struct BroadcastReport {
    /// Connections that accepted the write.
    pub delivered: Vec<ConnectionId>,
    /// Connections whose write failed, with the reason.
    pub failed: Vec<StreamError>,
}

impl BroadcastReport {
    /// Number of connections the message was attempted on.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.delivered.len() + self.failed.len()
    }

    /// Returns `true` if every attempted write succeeded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl<S: MessageSink> ConnectionRegistry<S> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
        }
    }

    /// Registers an accepted connection and returns its fresh id.
    pub fn connect(&self, sink: S) -> ConnectionId {
        let id = ConnectionId::new();
        self.connections.insert(id, Arc::new(Mutex::new(sink)));
        tracing::debug!(
            conn_id = %id,
            connections = self.connections.len(),
            "connection registered"
        );
        id
    }

    /// Removes a connection. Returns `false` if it was not registered, in
    /// which case nothing changes.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        let removed = self.connections.remove(&id).is_some();
        if removed {
            tracing::debug!(
                conn_id = %id,
                connections = self.connections.len(),
                "connection removed"
            );
        } else {
            tracing::trace!(conn_id = %id, "disconnect of unknown connection ignored");
        }
        removed
    }

    /// Sends `message` to exactly one connection.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::NotRegistered`] if `id` is not a member and
    /// [`StreamError::Delivery`] if the transport rejects the write.
    pub async fn unicast(&self, message: &str, id: ConnectionId) -> Result<(), StreamError> {
        let handle = self
            .connections
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(StreamError::NotRegistered(id))?;

        deliver(&handle, id, message).await
    }

    /// Sends `message` to every registered connection.
    ///
    /// A failed write never stops delivery to the remaining connections;
    /// failures are collected in the returned [`BroadcastReport`].
    /// Connections added or removed while the broadcast is in flight may
    /// or may not see the message.
    pub async fn broadcast(&self, message: &str) -> BroadcastReport {
        // Snapshot first so no shard lock is held across the sends.
        let targets: Vec<(ConnectionId, Handle<S>)> = self
            .connections
            .iter()
            .map(|entry| (*entry.key(), Arc::clone(entry.value())))
            .collect();

        let mut report = BroadcastReport {
            delivered: Vec::with_capacity(targets.len()),
            failed: Vec::new(),
        };

        for (id, handle) in &targets {
            match deliver(handle, *id, message).await {
                Ok(()) => report.delivered.push(*id),
                Err(err) => {
                    tracing::debug!(conn_id = %id, error = %err, "broadcast delivery failed");
                    report.failed.push(err);
                }
            }
        }

        report
    }

    /// Returns `true` if `id` is currently registered.
    #[must_use]
    pub fn contains(&self, id: ConnectionId) -> bool {
        self.connections.contains_key(&id)
    }

    /// Returns the ids of all registered connections, in no particular
    /// order.
    #[must_use]
    pub fn ids(&self) -> Vec<ConnectionId> {
        self.connections.iter().map(|entry| *entry.key()).collect()
    }

    /// Returns the number of registered connections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    /// Returns `true` if no connection is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}

async fn deliver<S: MessageSink>(
    handle: &Handle<S>,
    id: ConnectionId,
    message: &str,
) -> Result<(), StreamError> {
    let mut sink = handle.lock().await;
    sink.send_text(message.to_owned())
        .await
        .map_err(|source| StreamError::Delivery {
            id,
            source: Box::new(source),
        })
}

impl<S: MessageSink> Default for ConnectionRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for ConnectionRegistry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionRegistry")
            .field("connections", &self.connections.len())
            .finish()
    }
}
