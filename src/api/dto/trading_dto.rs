//! Trading DTOs: open orders and recent fills.

use serde::Serialize;
use utoipa::ToSchema;

/// Order direction.
#[derive(Debug, Clone, Copy, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    /// Buy order.
    Buy,
    /// Sell order.
    Sell,
}

/// Lifecycle state of an open order.
#[derive(Debug, Clone, Copy, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    /// Accepted, not yet filled.
    Pending,
}

/// An order waiting to be filled.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PendingOrder {
    /// Order identifier.
    pub id: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Buy or sell.
    #[serde(rename = "type")]
    pub side: OrderSide,
    /// Number of shares.
    pub quantity: u32,
    /// Limit price.
    pub price: f64,
    /// Order state.
    pub status: OrderStatus,
    /// Submission time (ISO-8601).
    pub timestamp: String,
}

/// A filled trade.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExecutedTrade {
    /// Trade identifier.
    pub id: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Buy or sell.
    #[serde(rename = "type")]
    pub side: OrderSide,
    /// Number of shares.
    pub quantity: u32,
    /// Fill price.
    pub price: f64,
    /// Execution time (ISO-8601).
    pub timestamp: String,
}

/// Response for `GET /api/trading/orders`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TradingOrders {
    /// Orders not yet filled.
    pub pending_orders: Vec<PendingOrder>,
    /// Most recent fills.
    pub recent_trades: Vec<ExecutedTrade>,
}
