use serde::{Deserialize, Serialize};

/// MACD line, signal line and histogram, index-aligned with the input closes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MacdSeries {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

impl MacdSeries {
    pub fn len(&self) -> usize {
        self.macd.len()
    }

    pub fn is_empty(&self) -> bool {
        self.macd.is_empty()
    }

    /// `(macd, signal, histogram)` at `index`.
    pub fn at(&self, index: usize) -> Option<(f64, f64, f64)> {
        Some((
            *self.macd.get(index)?,
            *self.signal.get(index)?,
            *self.histogram.get(index)?,
        ))
    }

    /// Values at the latest index.
    pub fn latest(&self) -> Option<(f64, f64, f64)> {
        self.at(self.len().checked_sub(1)?)
    }

    /// Values one index before the latest.
    pub fn previous(&self) -> Option<(f64, f64, f64)> {
        self.at(self.len().checked_sub(2)?)
    }
}

/// Indicators derived from one candle series. Never persisted.
///
/// The SMAs are point values over the trailing window (`0.0` when the series
/// is shorter than the lookback); the EMAs and MACD family are full sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub price: f64,
    pub sma_short: f64,
    pub sma_alignment: f64,
    pub ema_trend_fast: Vec<f64>,
    pub ema_trend_slow: Vec<f64>,
    pub macd: MacdSeries,
}

impl IndicatorSet {
    pub fn latest_ema_trend_fast(&self) -> f64 {
        self.ema_trend_fast.last().copied().unwrap_or(0.0)
    }

    pub fn latest_ema_trend_slow(&self) -> f64 {
        self.ema_trend_slow.last().copied().unwrap_or(0.0)
    }
}
