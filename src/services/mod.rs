//! Venue-facing services.

pub mod binance;
pub mod fetcher;
pub mod market_data;

pub use fetcher::CandleFetcher;
pub use market_data::MarketDataProvider;
