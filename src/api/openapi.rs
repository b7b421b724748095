//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

use super::dto;
use super::handlers::{analytics, portfolio, reports, risk, system, trading};
use crate::error::{ErrorBody, ErrorResponse};

/// Generated OpenAPI description of every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "folio-gateway",
        description = "Synthetic portfolio, risk, trading, analytics and report data for dashboard frontends. Live updates stream over the `/ws` WebSocket."
    ),
    paths(
        system::health_handler,
        portfolio::portfolio_overview,
        portfolio::asset_allocation,
        portfolio::performance_history,
        risk::value_at_risk,
        risk::stress_test,
        trading::trading_orders,
        analytics::market_sentiment,
        analytics::market_outlook,
        analytics::market_predictions,
        analytics::sentiment_breakdown,
        analytics::insights,
        analytics::model_performance,
        reports::performance_report,
        reports::compliance_report,
        reports::tax_report,
    ),
    components(schemas(
        dto::PortfolioOverview,
        dto::AssetAllocation,
        dto::PerformanceHistory,
        dto::ValueAtRisk,
        dto::StressTestReport,
        dto::TradingOrders,
        dto::MarketSentiment,
        dto::MarketOutlook,
        dto::MarketPredictions,
        dto::SentimentBreakdown,
        dto::InsightFeed,
        dto::ModelPerformance,
        dto::PerformanceReport,
        dto::ComplianceReport,
        dto::TaxReport,
        ErrorResponse,
        ErrorBody,
    )),
    tags(
        (name = "System", description = "Service health"),
        (name = "Portfolio", description = "Holdings and performance"),
        (name = "Risk", description = "Value-at-risk and stress tests"),
        (name = "Trading", description = "Orders and fills"),
        (name = "Analytics", description = "Sentiment and model output"),
        (name = "Reports", description = "Periodic reports"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_data_path() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        assert_eq!(paths.len(), 16);
        assert!(paths.contains(&"/health"));
        assert!(paths.contains(&"/api/risk/stress-test"));
        assert!(paths.contains(&"/api/reports/tax"));
    }
}
