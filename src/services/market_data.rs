//! Market data provider interface consumed by the scanner.
//!
//! All three calls are read-only and side-effect free. Transport, proxying
//! and TLS belong to the implementation.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::MarketDataError;
use crate::models::candles::Kline;
use crate::models::instrument::Instrument;

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Every instrument the venue lists, tradable or not.
    async fn list_instruments(&self) -> Result<Vec<Instrument>, MarketDataError>;

    /// Up to `limit` most recent candles for `symbol` on `interval`,
    /// oldest first.
    async fn get_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<Vec<Kline>, MarketDataError>;

    /// 24-hour traded volume keyed by symbol.
    async fn get_24h_volumes(&self) -> Result<HashMap<String, f64>, MarketDataError>;
}
