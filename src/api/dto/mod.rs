//! Data Transfer Objects for the read-only data endpoints.
//!
//! Field names follow the JSON documents consumed by the dashboard
//! frontend, including the odd `type`, `return` and `lastCheck` keys.
//!
//! Display labels and qualitative values are English. The legacy Korean
//! backend used localized values, so a frontend matching on them must map:
//!
//! | Field | Legacy value | Value here |
//! |-------|--------------|------------|
//! | `probability` ([`Likelihood`]) | `높음` / `중간` / `낮음` | `high` / `medium` / `low` |
//! | `status` ([`ComplianceStatus`]) | `준수` / `주의` | `compliant` / `warning` |
//! | `sentiment`, `overall_sentiment` | `매우 긍정적` / `긍정적` / `중립` / `부정적` | `very positive` / `positive` / `neutral` / `negative` |
//!
//! Keys, numbers, order sides and statuses (`BUY`, `PENDING`, ...),
//! insight kinds and impacts are unchanged.

pub mod analytics_dto;
pub mod portfolio_dto;
pub mod reports_dto;
pub mod risk_dto;
pub mod trading_dto;

pub use analytics_dto::*;
pub use portfolio_dto::*;
pub use reports_dto::*;
pub use risk_dto::*;
pub use trading_dto::*;
