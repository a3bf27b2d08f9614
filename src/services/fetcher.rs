//! Bounded, time-limited close series retrieval.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ScannerConfig;
use crate::error::FetchError;
use crate::models::candles::{CandleSeries, Kline, Timeframe};
use crate::services::market_data::MarketDataProvider;

#[derive(Clone)]
pub struct CandleFetcher {
    provider: Arc<dyn MarketDataProvider>,
    limit: usize,
    timeout: Duration,
    min_candles: usize,
}

impl CandleFetcher {
    pub fn new(
        provider: Arc<dyn MarketDataProvider>,
        limit: usize,
        timeout: Duration,
        min_candles: usize,
    ) -> Self {
        Self {
            provider,
            limit,
            timeout,
            min_candles,
        }
    }

    pub fn from_config(provider: Arc<dyn MarketDataProvider>, config: &ScannerConfig) -> Self {
        Self::new(
            provider,
            config.candle_limit,
            config.fetch_timeout,
            config.thresholds.min_candles,
        )
    }

    /// One attempt, cancelled after the configured timeout. Never retried.
    pub async fn fetch(&self, symbol: &str, timeframe: &Timeframe) -> Result<CandleSeries, FetchError> {
        let klines = tokio::time::timeout(
            self.timeout,
            self.provider
                .get_candles(symbol, &timeframe.interval, self.limit),
        )
        .await
        .map_err(|_| FetchError::Timeout(self.timeout))??;

        if klines.len() < self.min_candles {
            return Err(FetchError::InsufficientHistory {
                got: klines.len(),
                min: self.min_candles,
            });
        }

        let closes = parse_closes(&klines)?;
        Ok(CandleSeries::new(symbol, timeframe.clone(), closes))
    }
}

/// Parse every close; any non-finite or malformed value fails the whole series.
pub fn parse_closes(klines: &[Kline]) -> Result<Vec<f64>, FetchError> {
    klines
        .iter()
        .enumerate()
        .map(|(index, kline)| {
            kline
                .close
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| FetchError::Parse {
                    index,
                    value: kline.close.clone(),
                })
        })
        .collect()
}
