//! Synthetic market update pushed over the streaming endpoint.

use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

/// Range of the sampled portfolio value.
pub const PORTFOLIO_VALUE_RANGE: RangeInclusive<f64> = 1_000_000.0..=1_500_000.0;
/// Range of the sampled absolute daily change.
pub const DAILY_CHANGE_RANGE: RangeInclusive<f64> = -50_000.0..=50_000.0;
/// Range of the sampled daily change in percent.
pub const DAILY_CHANGE_PERCENT_RANGE: RangeInclusive<f64> = -5.0..=5.0;

/// Message type discriminator for streamed updates.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UpdateKind {
    /// Periodic portfolio value tick.
    MarketUpdate,
}

/// One tick of the live portfolio feed.
///
/// Every field is sampled independently; consecutive updates are not
/// correlated.
#[derive(Debug, Clone, Serialize)]
pub struct MarketUpdate {
    /// Always [`UpdateKind::MarketUpdate`].
    #[serde(rename = "type")]
    pub kind: UpdateKind,
    /// Generation time, serialized as ISO-8601.
    pub timestamp: DateTime<Utc>,
    /// Total portfolio value.
    pub portfolio_value: f64,
    /// Absolute change since the previous close.
    pub daily_change: f64,
    /// Relative change since the previous close, in percent.
    pub daily_change_percent: f64,
}

impl MarketUpdate {
    /// Draws a fresh update from `rng`, rounded to two decimals.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            kind: UpdateKind::MarketUpdate,
            timestamp: Utc::now(),
            portfolio_value: round2(rng.random_range(PORTFOLIO_VALUE_RANGE)),
            daily_change: round2(rng.random_range(DAILY_CHANGE_RANGE)),
            daily_change_percent: round2(rng.random_range(DAILY_CHANGE_PERCENT_RANGE)),
        }
    }

    /// Serializes the update to its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Rounds to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn samples_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let update = MarketUpdate::sample(&mut rng);
            assert!(PORTFOLIO_VALUE_RANGE.contains(&update.portfolio_value));
            assert!(DAILY_CHANGE_RANGE.contains(&update.daily_change));
            assert!(DAILY_CHANGE_PERCENT_RANGE.contains(&update.daily_change_percent));
        }
    }

    #[test]
    fn wire_form_has_expected_fields() {
        let mut rng = StdRng::seed_from_u64(1);
        let Ok(json) = MarketUpdate::sample(&mut rng).to_json() else {
            panic!("serialization failed");
        };
        let Ok(value) = serde_json::from_str::<serde_json::Value>(&json) else {
            panic!("invalid json");
        };
        let Some(obj) = value.as_object() else {
            panic!("expected object");
        };

        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "daily_change",
                "daily_change_percent",
                "portfolio_value",
                "timestamp",
                "type"
            ]
        );
        assert_eq!(obj.get("type").and_then(|v| v.as_str()), Some("market_update"));

        let Some(ts) = obj.get("timestamp").and_then(|v| v.as_str()) else {
            panic!("timestamp missing");
        };
        assert!(DateTime::parse_from_rfc3339(ts).is_ok());
    }

    #[test]
    fn round2_rounds_to_cents() {
        assert!((round2(1.23456) - 1.23).abs() < f64::EPSILON);
        assert!((round2(-4.995_1) - -5.0).abs() < f64::EPSILON);
    }
}
