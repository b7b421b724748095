//! Service layer: the data provider behind the REST endpoints and the
//! shared market feed.

pub mod market_data;
pub mod market_feed;

pub use market_data::MarketDataProvider;
pub use market_feed::spawn_broadcast_feed;
