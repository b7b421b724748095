//! Live-server tests for the `/ws` market feed and connection lifecycle.

#![allow(clippy::panic)]

use std::net::SocketAddr;
use std::time::Duration;

use futures_util::StreamExt;
use serde_json::Value;
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use folio_gateway::app_state::AppState;
use folio_gateway::config::{FeedMode, GatewayConfig};
use folio_gateway::server::build_app;
use folio_gateway::service::spawn_broadcast_feed;

type Client = WebSocketStream<MaybeTlsStream<TcpStream>>;

const INTERVAL: Duration = Duration::from_millis(100);

async fn spawn_server(feed_mode: FeedMode) -> (SocketAddr, AppState) {
    let config = GatewayConfig {
        update_interval: INTERVAL,
        feed_mode,
        ..GatewayConfig::default()
    };
    let state = AppState::new(&config);
    if feed_mode == FeedMode::Broadcast {
        spawn_broadcast_feed(std::sync::Arc::clone(&state.registry), INTERVAL);
    }
    let app = build_app(state.clone(), &config);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap_or_else(|e| panic!("bind: {e}"));
    let addr = listener
        .local_addr()
        .unwrap_or_else(|e| panic!("local addr: {e}"));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (addr, state)
}

async fn connect(addr: SocketAddr) -> Client {
    let (client, _) = connect_async(format!("ws://{addr}/ws"))
        .await
        .unwrap_or_else(|e| panic!("ws connect: {e}"));
    client
}

async fn next_update(client: &mut Client) -> Value {
    loop {
        let frame = tokio::time::timeout(Duration::from_secs(2), client.next())
            .await
            .unwrap_or_else(|_| panic!("no update within 2s"));
        let msg = match frame {
            Some(Ok(msg)) => msg,
            other => panic!("stream ended: {other:?}"),
        };
        if let Message::Text(text) = msg {
            return serde_json::from_str(text.as_str())
                .unwrap_or_else(|e| panic!("update is not json: {e}"));
        }
    }
}

fn assert_market_update(update: &Value) {
    assert_eq!(update.get("type").and_then(Value::as_str), Some("market_update"));
    let Some(ts) = update.get("timestamp").and_then(Value::as_str) else {
        panic!("timestamp missing: {update}");
    };
    assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok(), "timestamp {ts}");

    let field = |name: &str| {
        update
            .get(name)
            .and_then(Value::as_f64)
            .unwrap_or_else(|| panic!("{name} missing: {update}"))
    };
    assert!((1_000_000.0..=1_500_000.0).contains(&field("portfolio_value")));
    assert!((-50_000.0..=50_000.0).contains(&field("daily_change")));
    assert!((-5.0..=5.0).contains(&field("daily_change_percent")));
}

async fn wait_until_empty(state: &AppState) {
    for _ in 0..100 {
        if state.registry.is_empty() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("registry still holds {} connections", state.registry.len());
}

#[tokio::test]
async fn session_streams_independent_updates() {
    let (addr, state) = spawn_server(FeedMode::Unicast).await;
    let mut client = connect(addr).await;

    let first = next_update(&mut client).await;
    assert_market_update(&first);
    assert_eq!(state.registry.len(), 1);

    let second = next_update(&mut client).await;
    assert_market_update(&second);
    assert_ne!(first, second);
}

#[tokio::test]
async fn closed_session_is_deregistered() {
    let (addr, state) = spawn_server(FeedMode::Unicast).await;
    let mut client = connect(addr).await;
    let _ = next_update(&mut client).await;
    assert_eq!(state.registry.len(), 1);

    tokio_test::assert_ok!(client.close(None).await);
    wait_until_empty(&state).await;
}

#[tokio::test]
async fn dropped_client_is_deregistered() {
    let (addr, state) = spawn_server(FeedMode::Unicast).await;
    let client = connect(addr).await;
    drop(client);
    wait_until_empty(&state).await;
}

#[tokio::test]
async fn sessions_are_isolated() {
    let (addr, state) = spawn_server(FeedMode::Unicast).await;
    let mut a = connect(addr).await;
    let mut b = connect(addr).await;

    assert_market_update(&next_update(&mut a).await);
    assert_market_update(&next_update(&mut b).await);
    assert_eq!(state.registry.len(), 2);

    tokio_test::assert_ok!(a.close(None).await);
    // b keeps streaming after a leaves.
    assert_market_update(&next_update(&mut b).await);
}

#[tokio::test]
async fn broadcast_feed_reaches_all_sessions() {
    let (addr, state) = spawn_server(FeedMode::Broadcast).await;
    let mut a = connect(addr).await;
    let mut b = connect(addr).await;

    assert_market_update(&next_update(&mut a).await);
    assert_market_update(&next_update(&mut b).await);
    assert_eq!(state.registry.len(), 2);

    drop(a);
    assert_market_update(&next_update(&mut b).await);
}

#[tokio::test]
async fn health_over_http_counts_open_sessions() {
    let (addr, _state) = spawn_server(FeedMode::Unicast).await;
    let mut client = connect(addr).await;
    let _ = next_update(&mut client).await;

    let response = reqwest::get(format!("http://{addr}/health"))
        .await
        .unwrap_or_else(|e| panic!("health request: {e}"));
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response
        .json()
        .await
        .unwrap_or_else(|e| panic!("health body: {e}"));
    assert_eq!(body.get("connections").and_then(Value::as_u64), Some(1));
}
