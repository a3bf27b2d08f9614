use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::candles::Timeframe;

/// Where the MACD line sits relative to its signal line at acceptance time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendLabel {
    AlreadyCrossedBullish,
    ImminentCross,
    Entangled,
    Approaching,
}

impl TrendLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendLabel::AlreadyCrossedBullish => "already crossed bullish",
            TrendLabel::ImminentCross => "imminent cross",
            TrendLabel::Entangled => "entangled",
            TrendLabel::Approaching => "approaching",
        }
    }
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A symbol that passed every filter stage for one timeframe.
///
/// Only built by the signal evaluator, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcceptedRecord {
    pub symbol: String,
    pub timeframe: Timeframe,
    pub price: f64,
    pub sma_short: f64,
    pub ema_trend_fast: f64,
    pub ema_trend_slow: f64,
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
    pub volume_24h: f64,
    pub stop_loss_pct: f64,
    pub trend: TrendLabel,
}
