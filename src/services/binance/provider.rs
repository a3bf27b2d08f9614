//! Binance futures market data provider (REST only).

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use super::messages::{ExchangeInfo, Ticker24hr};
use crate::config::VenueConfig;
use crate::error::{ConfigError, MarketDataError};
use crate::models::candles::Kline;
use crate::models::instrument::Instrument;
use crate::services::market_data::MarketDataProvider;

pub const EXCHANGE_INFO_PATH: &str = "/fapi/v1/exchangeInfo";
pub const KLINES_PATH: &str = "/fapi/v1/klines";
pub const TICKER_24HR_PATH: &str = "/fapi/v1/ticker/24hr";

pub struct BinanceFuturesProvider {
    client: Client,
    base_url: String,
}

impl BinanceFuturesProvider {
    /// Build the HTTP client from venue settings (proxy, certificate policy).
    pub fn new(venue: &VenueConfig) -> Result<Self, ConfigError> {
        let mut builder = Client::builder().danger_accept_invalid_certs(venue.accept_invalid_certs);
        if let Some(proxy_url) = &venue.proxy_url {
            let proxy = reqwest::Proxy::all(proxy_url).map_err(ConfigError::HttpClient)?;
            builder = builder.proxy(proxy);
        }
        let client = builder.build().map_err(ConfigError::HttpClient)?;
        Ok(Self::with_client(venue.base_url.clone(), client))
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, MarketDataError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketDataError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| MarketDataError::Decode {
            endpoint: path.to_string(),
            source,
        })
    }
}

/// Binance kline row: `[openTime, open, high, low, close, volume, closeTime, ...]`.
pub fn parse_kline(row: &Value) -> Result<Kline, MarketDataError> {
    let invalid = |reason: &str| MarketDataError::InvalidResponse {
        endpoint: KLINES_PATH.to_string(),
        reason: reason.to_string(),
    };

    let fields = row.as_array().ok_or_else(|| invalid("kline is not an array"))?;
    if fields.len() < 5 {
        return Err(invalid("kline has fewer than 5 fields"));
    }

    let open_time = fields[0]
        .as_i64()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .ok_or_else(|| invalid("kline open time is not a timestamp"))?;

    // Closes arrive as strings; a number is tolerated and kept verbatim.
    let close = match &fields[4] {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return Err(invalid("kline close is neither string nor number")),
    };

    Ok(Kline::new(open_time, close))
}

#[async_trait]
impl MarketDataProvider for BinanceFuturesProvider {
    async fn list_instruments(&self) -> Result<Vec<Instrument>, MarketDataError> {
        let info: ExchangeInfo = self.get_json(EXCHANGE_INFO_PATH, &[]).await?;

        info!(
            count = info.symbols.len(),
            "BinanceFuturesProvider: exchangeInfo listed {} symbols",
            info.symbols.len()
        );

        Ok(info
            .symbols
            .into_iter()
            .map(|s| Instrument::new(s.symbol, s.quote_asset, s.status))
            .collect())
    }

    async fn get_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<Vec<Kline>, MarketDataError> {
        let query = [
            ("symbol", symbol.to_string()),
            ("interval", interval.to_string()),
            ("limit", limit.to_string()),
        ];
        let rows: Vec<Value> = self.get_json(KLINES_PATH, &query).await?;
        rows.iter().map(parse_kline).collect()
    }

    async fn get_24h_volumes(&self) -> Result<HashMap<String, f64>, MarketDataError> {
        let tickers: Vec<Ticker24hr> = self.get_json(TICKER_24HR_PATH, &[]).await?;

        let mut volumes = HashMap::with_capacity(tickers.len());
        for ticker in tickers {
            match ticker.quote_volume.parse::<f64>() {
                Ok(volume) => {
                    volumes.insert(ticker.symbol, volume);
                }
                Err(_) => {
                    debug!(
                        symbol = %ticker.symbol,
                        value = %ticker.quote_volume,
                        "BinanceFuturesProvider: skipping unparsable 24h volume"
                    );
                }
            }
        }
        Ok(volumes)
    }
}
