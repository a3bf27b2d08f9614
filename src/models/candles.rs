use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two scan phases a timeframe belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Short,
    Long,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Short => "short",
            Phase::Long => "long",
        }
    }
}

/// A candle interval tagged with the phase it is scanned in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timeframe {
    pub interval: String,
    pub phase: Phase,
}

impl Timeframe {
    pub fn short(interval: impl Into<String>) -> Self {
        Self {
            interval: interval.into(),
            phase: Phase::Short,
        }
    }

    pub fn long(interval: impl Into<String>) -> Self {
        Self {
            interval: interval.into(),
            phase: Phase::Long,
        }
    }

    pub fn is_short(&self) -> bool {
        self.phase == Phase::Short
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.interval)
    }
}

/// Raw venue candle. Only the close is consumed; it stays a string until the
/// fetcher parses it so malformed prices surface as a parse failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kline {
    pub open_time: DateTime<Utc>,
    pub close: String,
}

impl Kline {
    pub fn new(open_time: DateTime<Utc>, close: impl Into<String>) -> Self {
        Self {
            open_time,
            close: close.into(),
        }
    }
}

/// Chronological close prices (oldest first) for one symbol and timeframe.
#[derive(Debug, Clone, PartialEq)]
pub struct CandleSeries {
    pub symbol: String,
    pub timeframe: Timeframe,
    closes: Vec<f64>,
}

impl CandleSeries {
    pub fn new(symbol: impl Into<String>, timeframe: Timeframe, closes: Vec<f64>) -> Self {
        Self {
            symbol: symbol.into(),
            timeframe,
            closes,
        }
    }

    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// Latest close, if any.
    pub fn last_price(&self) -> Option<f64> {
        self.closes.last().copied()
    }
}
