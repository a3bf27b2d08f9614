//! Error taxonomy for the scanner.

use std::time::Duration;

use thiserror::Error;

/// Failures of the venue adapter itself.
#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{endpoint} returned status {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid {endpoint} response: {reason}")]
    InvalidResponse { endpoint: String, reason: String },
}

/// Per-(symbol, timeframe) fetch failures. Always soft: the task is skipped.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Candle fetch timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("Candle fetch failed: {0}")]
    Transport(#[from] MarketDataError),

    #[error("Unparsable close price {value:?} at index {index}")]
    Parse { index: usize, value: String },

    #[error("Not enough candles: {got} < {min}")]
    InsufficientHistory { got: usize, min: usize },
}

impl FetchError {
    /// Short label used for logs and metric labels.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Timeout(_) => "timeout",
            FetchError::Transport(_) => "transport",
            FetchError::Parse { .. } => "parse",
            FetchError::InsufficientHistory { .. } => "insufficient_history",
        }
    }
}

/// Run-level failures.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to retrieve instrument universe: {0}")]
    UniverseRetrieval(#[source] MarketDataError),

    #[error("Result collector stopped unexpectedly: {0}")]
    Collector(#[from] tokio::task::JoinError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },

    #[error("Candle window {limit} is below the {min}-candle floor")]
    WindowTooSmall { limit: usize, min: usize },

    #[error("Indicator period {0} must be > 0")]
    ZeroPeriod(&'static str),

    #[error("Invalid URL {0:?}: {1}")]
    InvalidUrl(String, #[source] url::ParseError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl ConfigError {
    pub fn invalid(key: &'static str, value: &str) -> Self {
        ConfigError::Invalid {
            key,
            value: value.to_string(),
        }
    }
}
