//! Shared market feed for [`FeedMode::Broadcast`](crate::config::FeedMode).
//!
//! One producer task samples a single [`MarketUpdate`] per interval and
//! fans it out to every registered connection.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use crate::domain::{BroadcastReport, ConnectionRegistry, MarketUpdate, MessageSink};

/// Shortest period a feed ticker runs at.
pub const MIN_UPDATE_INTERVAL: Duration = Duration::from_millis(1);

/// Ticker for a market feed: first tick one `period` from now, late ticks
/// delayed rather than bunched. Periods below [`MIN_UPDATE_INTERVAL`] are
/// raised to it.
#[must_use]
pub fn update_ticker(period: Duration) -> Interval {
    let period = period.max(MIN_UPDATE_INTERVAL);
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// Spawns [`run_broadcast_feed`] on the current runtime.
pub fn spawn_broadcast_feed<S: MessageSink>(
    registry: Arc<ConnectionRegistry<S>>,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(run_broadcast_feed(registry, period))
}

/// Broadcasts a fresh update every `period`, forever. Ticks with no
/// registered connection are skipped.
pub async fn run_broadcast_feed<S: MessageSink>(
    registry: Arc<ConnectionRegistry<S>>,
    period: Duration,
) {
    let mut ticker = update_ticker(period);
    tracing::info!(period_ms = ticker.period().as_millis() as u64, "broadcast feed started");

    loop {
        ticker.tick().await;
        if registry.is_empty() {
            continue;
        }
        if let Some(report) = broadcast_update(&registry).await {
            log_report(&report);
        }
    }
}

/// Samples one update and broadcasts it. Returns `None` if the update
/// could not be encoded.
pub async fn broadcast_update<S: MessageSink>(
    registry: &ConnectionRegistry<S>,
) -> Option<BroadcastReport> {
    let update = MarketUpdate::sample(&mut rand::rng());
    let payload = match update.to_json() {
        Ok(payload) => payload,
        Err(err) => {
            tracing::error!(error = %err, "failed to encode market update");
            return None;
        }
    };
    Some(registry.broadcast(&payload).await)
}

fn log_report(report: &BroadcastReport) {
    if report.is_complete() {
        tracing::trace!(delivered = report.delivered.len(), "market update broadcast");
    } else {
        tracing::debug!(
            delivered = report.delivered.len(),
            failed = report.failed.len(),
            "market update broadcast with failures"
        );
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::connection_registry::tests::RecordingSink;

    #[tokio::test]
    async fn broadcast_update_reaches_every_connection() {
        let registry = ConnectionRegistry::new();
        let a = RecordingSink::default();
        let b = RecordingSink::failing();
        registry.connect(a.clone());
        registry.connect(b);

        let Some(report) = broadcast_update(&registry).await else {
            panic!("update must encode");
        };
        assert_eq!(report.delivered.len(), 1);
        assert_eq!(report.failed.len(), 1);

        let messages = a.messages();
        assert_eq!(messages.len(), 1);
        let Some(first) = messages.first() else {
            panic!("one message expected");
        };
        let Ok(value) = serde_json::from_str::<serde_json::Value>(first) else {
            panic!("payload must be json");
        };
        assert_eq!(value.get("type").and_then(|v| v.as_str()), Some("market_update"));
    }

    #[tokio::test]
    async fn zero_period_is_raised_to_minimum() {
        assert_eq!(update_ticker(Duration::ZERO).period(), MIN_UPDATE_INTERVAL);
        assert_eq!(
            update_ticker(Duration::from_millis(250)).period(),
            Duration::from_millis(250)
        );
    }

    #[tokio::test]
    async fn feed_with_zero_period_keeps_running() {
        let registry = Arc::new(ConnectionRegistry::new());
        let sink = RecordingSink::default();
        registry.connect(sink.clone());

        let feed = spawn_broadcast_feed(Arc::clone(&registry), Duration::ZERO);
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(!feed.is_finished());
        feed.abort();

        assert!(!sink.messages().is_empty());
    }

    #[tokio::test]
    async fn feed_ticks_until_aborted() {
        let registry = Arc::new(ConnectionRegistry::new());
        let sink = RecordingSink::default();
        registry.connect(sink.clone());

        let feed = spawn_broadcast_feed(Arc::clone(&registry), Duration::from_millis(20));
        tokio::time::sleep(Duration::from_millis(150)).await;
        feed.abort();

        let count = sink.messages().len();
        assert!(count >= 2, "expected several ticks, got {count}");
        // Every tick samples independently, so payloads are distinct.
        let messages = sink.messages();
        assert!(messages.windows(2).all(|pair| pair.first() != pair.get(1)));
    }
}
