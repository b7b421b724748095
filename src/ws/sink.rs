//! [`MessageSink`] implementation for the write half of an Axum
//! WebSocket.

use std::future::Future;

use axum::extract::ws::{Message, WebSocket};
use futures_util::SinkExt;
use futures_util::stream::SplitSink;

use crate::domain::MessageSink;

/// Write half of an accepted WebSocket, as stored in the registry.
pub type WsSink = SplitSink<WebSocket, Message>;

impl MessageSink for WsSink {
    type Error = axum::Error;

    fn send_text(&mut self, text: String) -> impl Future<Output = Result<(), axum::Error>> + Send {
        self.send(Message::text(text))
    }
}
