//! Gateway configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, bail};
use axum::http::HeaderValue;

/// Origins allowed to call the API from a browser when
/// `CORS_ALLOWED_ORIGINS` is unset.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] =
    ["http://localhost:3000", "https://your-domain.railway.app"];

/// How streamed market updates are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedMode {
    /// Each session generates its own update and unicasts it back.
    #[default]
    Unicast,
    /// One producer generates a shared update and broadcasts it to all
    /// sessions.
    Broadcast,
}

impl FromStr for FeedMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unicast" => Ok(Self::Unicast),
            "broadcast" => Ok(Self::Broadcast),
            other => bail!("unknown feed mode {other:?} (expected unicast or broadcast)"),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8000`).
    pub listen_addr: SocketAddr,

    /// Browser origins permitted by the CORS layer.
    pub allowed_origins: Vec<HeaderValue>,

    /// Time between two streamed market updates.
    pub update_interval: Duration,

    /// Whether updates are unicast per session or broadcast to all.
    pub feed_mode: FeedMode,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .into_iter()
                .map(HeaderValue::from_static)
                .collect(),
            update_interval: Duration::from_millis(2_000),
            feed_mode: FeedMode::Unicast,
            log_format: LogFormat::Text,
        }
    }
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to [`GatewayConfig::default`] for anything not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR`, `HOST`, `PORT`,
    /// `CORS_ALLOWED_ORIGINS` or `FEED_MODE` is set but invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`GatewayConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let listen_addr = match lookup("LISTEN_ADDR") {
            Some(addr) => addr
                .parse()
                .with_context(|| format!("invalid LISTEN_ADDR {addr:?}"))?,
            None => {
                let host: IpAddr = match lookup("HOST") {
                    Some(host) => host
                        .parse()
                        .with_context(|| format!("invalid HOST {host:?}"))?,
                    None => defaults.listen_addr.ip(),
                };
                let port: u16 = match lookup("PORT") {
                    Some(port) => port
                        .parse()
                        .with_context(|| format!("invalid PORT {port:?}"))?,
                    None => defaults.listen_addr.port(),
                };
                SocketAddr::new(host, port)
            }
        };

        let allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(list) => parse_origins(&list)?,
            None => defaults.allowed_origins,
        };

        let update_interval = lookup("MARKET_UPDATE_INTERVAL_MS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map_or(defaults.update_interval, Duration::from_millis);

        let feed_mode = match lookup("FEED_MODE") {
            Some(mode) => mode.parse()?,
            None => defaults.feed_mode,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") | Some("JSON") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            listen_addr,
            allowed_origins,
            update_interval,
            feed_mode,
            log_format,
        })
    }
}

/// Parses a comma-separated origin list, skipping empty items.
fn parse_origins(list: &str) -> anyhow::Result<Vec<HeaderValue>> {
    let origins = list
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).with_context(|| format!("invalid CORS origin {origin:?}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    if origins.is_empty() {
        bail!("CORS_ALLOWED_ORIGINS is set but lists no origin");
    }
    Ok(origins)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<GatewayConfig> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        GatewayConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_set() {
        let Ok(cfg) = load(&[]) else {
            panic!("defaults must load");
        };
        assert_eq!(cfg.listen_addr, SocketAddr::from(([0, 0, 0, 0], 8000)));
        assert_eq!(cfg.allowed_origins.len(), 2);
        assert_eq!(cfg.update_interval, Duration::from_secs(2));
        assert_eq!(cfg.feed_mode, FeedMode::Unicast);
        assert_eq!(cfg.log_format, LogFormat::Text);
    }

    #[test]
    fn host_and_port_compose() {
        let Ok(cfg) = load(&[("HOST", "127.0.0.1"), ("PORT", "9100")]) else {
            panic!("valid host/port");
        };
        assert_eq!(cfg.listen_addr, SocketAddr::from(([127, 0, 0, 1], 9100)));
    }

    #[test]
    fn listen_addr_overrides_host_port() {
        let Ok(cfg) = load(&[
            ("LISTEN_ADDR", "127.0.0.1:4000"),
            ("HOST", "10.0.0.1"),
            ("PORT", "1"),
        ]) else {
            panic!("valid listen addr");
        };
        assert_eq!(cfg.listen_addr.port(), 4000);
    }

    #[test]
    fn invalid_port_is_an_error() {
        assert!(load(&[("PORT", "not-a-port")]).is_err());
        assert!(load(&[("LISTEN_ADDR", "nowhere")]).is_err());
    }

    #[test]
    fn origins_are_split_and_trimmed() {
        let Ok(cfg) = load(&[(
            "CORS_ALLOWED_ORIGINS",
            " http://a.example , https://b.example,,",
        )]) else {
            panic!("valid origins");
        };
        assert_eq!(
            cfg.allowed_origins,
            vec![
                HeaderValue::from_static("http://a.example"),
                HeaderValue::from_static("https://b.example"),
            ]
        );
        assert!(load(&[("CORS_ALLOWED_ORIGINS", " , ")]).is_err());
    }

    #[test]
    fn feed_mode_and_interval() {
        let Ok(cfg) = load(&[("FEED_MODE", "Broadcast"), ("MARKET_UPDATE_INTERVAL_MS", "250")])
        else {
            panic!("valid feed config");
        };
        assert_eq!(cfg.feed_mode, FeedMode::Broadcast);
        assert_eq!(cfg.update_interval, Duration::from_millis(250));

        assert!(load(&[("FEED_MODE", "multicast")]).is_err());

        let Ok(cfg) = load(&[("MARKET_UPDATE_INTERVAL_MS", "0")]) else {
            panic!("zero interval falls back");
        };
        assert_eq!(cfg.update_interval, Duration::from_secs(2));
    }

    #[test]
    fn json_log_format() {
        let Ok(cfg) = load(&[("LOG_FORMAT", "json")]) else {
            panic!("valid log format");
        };
        assert_eq!(cfg.log_format, LogFormat::Json);
    }
}
