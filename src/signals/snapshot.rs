//! Latest-two-bar view of the MACD family, where every gate reads from.

use crate::models::indicators::MacdSeries;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdSnapshot {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
    pub prev_macd: f64,
    pub prev_signal: f64,
    pub prev_histogram: f64,
}

impl MacdSnapshot {
    /// `None` unless the series has at least two points.
    pub fn from_series(series: &MacdSeries) -> Option<Self> {
        let (macd, signal, histogram) = series.latest()?;
        let (prev_macd, prev_signal, prev_histogram) = series.previous()?;
        Some(Self {
            macd,
            signal,
            histogram,
            prev_macd,
            prev_signal,
            prev_histogram,
        })
    }

    pub fn distance(&self) -> f64 {
        (self.macd - self.signal).abs()
    }

    pub fn previous_distance(&self) -> f64 {
        (self.prev_macd - self.prev_signal).abs()
    }

    /// `|macd - signal| / |signal|`, `None` on a zero signal line.
    pub fn relative_distance(&self) -> Option<f64> {
        if self.signal == 0.0 {
            None
        } else {
            Some(self.distance() / self.signal.abs())
        }
    }

    pub fn signal_above_zero(&self) -> bool {
        self.signal > 0.0
    }

    /// The gap shrank since the previous bar.
    pub fn converging(&self) -> bool {
        self.distance() < self.previous_distance()
    }

    /// Lines rotating toward each other: the lower line is rising faster than
    /// the upper one.
    pub fn crossing_trend(&self) -> bool {
        let macd_rate = self.macd - self.prev_macd;
        let signal_rate = self.signal - self.prev_signal;
        (self.macd < self.signal && macd_rate > signal_rate)
            || (self.macd > self.signal && macd_rate < signal_rate)
    }

    /// Histogram turned positive on the latest bar.
    pub fn fresh_bullish_cross(&self) -> bool {
        self.histogram > 0.0 && self.prev_histogram <= 0.0
    }

    /// Histogram positive on both bars; nothing new to report.
    pub fn sustained_bullish(&self) -> bool {
        self.histogram > 0.0 && self.prev_histogram > 0.0
    }
}
