//! Analytics DTOs: sentiment, model predictions, and insights.

use serde::Serialize;
use utoipa::ToSchema;

/// Sentiment label with its score in `[0, 1]`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SectorScore {
    /// Qualitative label.
    pub sentiment: String,
    /// Score in `[0, 1]`.
    pub score: f64,
}

/// Sentiment per tracked sector.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SectorSentiments {
    /// Technology sector.
    pub technology: SectorScore,
    /// Healthcare sector.
    pub healthcare: SectorScore,
    /// Financials sector.
    pub finance: SectorScore,
    /// Energy sector.
    pub energy: SectorScore,
    /// Consumer sector.
    pub consumer: SectorScore,
}

/// Response for `GET /api/analytics/market-sentiment`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MarketSentiment {
    /// Market-wide label.
    pub overall_sentiment: String,
    /// Market-wide score in `[0, 1]`.
    pub sentiment_score: f64,
    /// Per-sector breakdown.
    pub sectors: SectorSentiments,
    /// Topics driving the current sentiment.
    pub trending_topics: Vec<String>,
}

/// Response for `GET /api/analytics/predictions`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MarketOutlook {
    /// Predicted direction.
    pub market_direction: String,
    /// Model confidence in `[0, 1]`.
    pub confidence: f64,
    /// Factors supporting the prediction.
    pub key_factors: Vec<String>,
    /// Factors that could invalidate it.
    pub risk_factors: Vec<String>,
    /// Suggested portfolio actions.
    pub recommendations: Vec<String>,
}

/// Predicted versus realised monthly return.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PredictionPoint {
    /// Month as `YYYY-MM`.
    pub date: String,
    /// Realised return in percent.
    pub actual: f64,
    /// Predicted return in percent.
    pub predicted: f64,
    /// Model confidence in percent.
    pub confidence: u8,
}

/// Response for `GET /api/analytics/market-predictions`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MarketPredictions {
    /// Monthly points, oldest first.
    pub predictions: Vec<PredictionPoint>,
}

/// Share of positive, negative and neutral coverage for a sector.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SentimentSplit {
    /// Sector name.
    pub sector: String,
    /// Positive share in percent.
    pub positive: u8,
    /// Negative share in percent.
    pub negative: u8,
    /// Neutral share in percent.
    pub neutral: u8,
}

/// Response for `GET /api/analytics/sentiment`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SentimentBreakdown {
    /// One entry per sector.
    pub sentiment: Vec<SentimentSplit>,
}

/// Kind of insight raised by the model.
#[derive(Debug, Clone, Copy, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    /// Potential upside.
    Opportunity,
    /// Potential downside.
    Risk,
}

/// Expected impact of an insight.
#[derive(Debug, Clone, Copy, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    /// Major.
    High,
    /// Moderate.
    Medium,
    /// Minor.
    Low,
}

/// One model-generated insight.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Insight {
    /// Insight number.
    pub id: u32,
    /// Opportunity or risk.
    #[serde(rename = "type")]
    pub kind: InsightKind,
    /// Headline.
    pub title: String,
    /// Explanation.
    pub description: String,
    /// Model confidence in percent.
    pub confidence: u8,
    /// Expected impact.
    pub impact: Impact,
    /// Relative age, e.g. `"2 hours ago"`.
    pub timestamp: String,
}

/// Response for `GET /api/analytics/insights`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InsightFeed {
    /// Most recent first.
    pub insights: Vec<Insight>,
}

/// Model quality indicators.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ModelMetrics {
    /// Hit rate of directional calls, in percent.
    pub ai_accuracy: f64,
    /// Aggregate sentiment index.
    pub sentiment_index: f64,
    /// Aggregate risk score.
    pub risk_score: f64,
    /// Number of active algorithmic signals.
    pub algorithm_signals: u32,
}

/// Response for `GET /api/analytics/performance`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ModelPerformance {
    /// Indicator values.
    pub metrics: ModelMetrics,
}
