//! Scanner configuration, read from the process environment.
//!
//! Values that fail to parse fall back to their defaults; values that parse
//! but make no sense are rejected by [`ScannerConfig::validate`].

use std::env;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

use crate::core::ranking::RankingPolicy;
use crate::error::ConfigError;
use crate::models::candles::Timeframe;

pub const DEFAULT_BASE_URL: &str = "https://fapi.binance.com";
pub const DEFAULT_QUOTE_ASSET: &str = "USDT";
pub const DEFAULT_CANDLE_LIMIT: usize = 200;
pub const DEFAULT_CONCURRENCY: usize = 80;
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(3);

/// Current deployment environment (`sandbox` unless told otherwise).
pub fn get_environment() -> String {
    env::var("SCANNER_ENV")
        .or_else(|_| env::var("ENVIRONMENT"))
        .unwrap_or_else(|_| "sandbox".to_string())
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn env_string(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Moving-average lookbacks and MACD periods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorParams {
    pub sma_short: usize,
    /// Same-timeframe stand-in for longer-horizon alignment (short phase only).
    pub sma_alignment: usize,
    pub ema_trend_fast: usize,
    pub ema_trend_slow: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            sma_short: 25,
            sma_alignment: 100,
            ema_trend_fast: 144,
            ema_trend_slow: 169,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
        }
    }
}

impl IndicatorParams {
    fn periods(&self) -> [(&'static str, usize); 7] {
        [
            ("sma_short", self.sma_short),
            ("sma_alignment", self.sma_alignment),
            ("ema_trend_fast", self.ema_trend_fast),
            ("ema_trend_slow", self.ema_trend_slow),
            ("macd_fast", self.macd_fast),
            ("macd_slow", self.macd_slow),
            ("macd_signal", self.macd_signal),
        ]
    }
}

/// Calibrated filter constants.
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    /// Minimum usable series length.
    pub min_candles: usize,
    /// Absolute MACD/signal gap under which a cross is "imminent".
    pub imminent_abs: f64,
    /// Relative gap under which the lines are labelled "entangled".
    pub entangled_rel: f64,
    /// Relative gap under which the configuration gate treats the lines as
    /// already converged.
    pub converged_rel: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_candles: 35,
            imminent_abs: 0.0005,
            entangled_rel: 0.03,
            converged_rel: 0.05,
        }
    }
}

/// Which acceptance policy the evaluator runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterPolicyKind {
    #[default]
    Convergence,
    FreshCross,
}

impl FromStr for FilterPolicyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "convergence" => Ok(Self::Convergence),
            "fresh-cross" | "fresh_cross" => Ok(Self::FreshCross),
            other => Err(ConfigError::invalid("SCANNER_FILTER_POLICY", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::invalid("SCANNER_OUTPUT", other)),
        }
    }
}

/// Venue connectivity. Owned by the caller, handed to the adapter as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct VenueConfig {
    pub base_url: String,
    pub proxy_url: Option<String>,
    pub accept_invalid_certs: bool,
}

impl Default for VenueConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            proxy_url: None,
            accept_invalid_certs: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScannerConfig {
    pub environment: String,
    pub venue: VenueConfig,
    pub quote_asset: String,
    pub candle_limit: usize,
    pub short_timeframe: String,
    pub long_timeframe: String,
    pub concurrency: usize,
    pub fetch_timeout: Duration,
    pub indicators: IndicatorParams,
    pub thresholds: Thresholds,
    pub filter_policy: FilterPolicyKind,
    pub ranking: RankingPolicy,
    pub output: OutputFormat,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            environment: "sandbox".to_string(),
            venue: VenueConfig::default(),
            quote_asset: DEFAULT_QUOTE_ASSET.to_string(),
            candle_limit: DEFAULT_CANDLE_LIMIT,
            short_timeframe: "1h".to_string(),
            long_timeframe: "4h".to_string(),
            concurrency: DEFAULT_CONCURRENCY,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            indicators: IndicatorParams::default(),
            thresholds: Thresholds::default(),
            filter_policy: FilterPolicyKind::default(),
            ranking: RankingPolicy::default(),
            output: OutputFormat::default(),
        }
    }
}

impl ScannerConfig {
    /// Build from environment variables over [`ScannerConfig::default`].
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let proxy_url = env::var("SCANNER_PROXY_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let fetch_timeout_ms = env_or(
            "SCANNER_FETCH_TIMEOUT_MS",
            defaults.fetch_timeout.as_millis() as u64,
        );

        Self {
            environment: get_environment(),
            venue: VenueConfig {
                base_url: env_string("BINANCE_BASE_URL", &defaults.venue.base_url),
                proxy_url,
                accept_invalid_certs: env_or("SCANNER_ACCEPT_INVALID_CERTS", false),
            },
            quote_asset: env_string("SCANNER_QUOTE_ASSET", &defaults.quote_asset),
            candle_limit: env_or("SCANNER_CANDLE_LIMIT", defaults.candle_limit),
            short_timeframe: env_string("SCANNER_SHORT_TIMEFRAME", &defaults.short_timeframe),
            long_timeframe: env_string("SCANNER_LONG_TIMEFRAME", &defaults.long_timeframe),
            concurrency: env_or("SCANNER_CONCURRENCY", defaults.concurrency),
            fetch_timeout: Duration::from_millis(fetch_timeout_ms),
            indicators: defaults.indicators,
            thresholds: defaults.thresholds,
            filter_policy: env_or("SCANNER_FILTER_POLICY", defaults.filter_policy),
            ranking: env_or("SCANNER_RANK_BY", defaults.ranking),
            output: env_or("SCANNER_OUTPUT", defaults.output),
        }
    }

    pub fn short(&self) -> Timeframe {
        Timeframe::short(self.short_timeframe.clone())
    }

    pub fn long(&self) -> Timeframe {
        Timeframe::long(self.long_timeframe.clone())
    }

    pub fn is_production(&self) -> bool {
        matches!(self.environment.as_str(), "production" | "prod")
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency == 0 {
            return Err(ConfigError::invalid("SCANNER_CONCURRENCY", "0"));
        }
        if self.fetch_timeout.is_zero() {
            return Err(ConfigError::invalid("SCANNER_FETCH_TIMEOUT_MS", "0"));
        }
        if self.candle_limit < self.thresholds.min_candles {
            return Err(ConfigError::WindowTooSmall {
                limit: self.candle_limit,
                min: self.thresholds.min_candles,
            });
        }
        if self.short_timeframe == self.long_timeframe {
            return Err(ConfigError::invalid(
                "SCANNER_LONG_TIMEFRAME",
                &self.long_timeframe,
            ));
        }
        for (name, period) in self.indicators.periods() {
            if period == 0 {
                return Err(ConfigError::ZeroPeriod(name));
            }
        }
        Url::parse(&self.venue.base_url)
            .map_err(|e| ConfigError::InvalidUrl(self.venue.base_url.clone(), e))?;
        if let Some(proxy) = &self.venue.proxy_url {
            Url::parse(proxy).map_err(|e| ConfigError::InvalidUrl(proxy.clone(), e))?;
        }
        Ok(())
    }
}
