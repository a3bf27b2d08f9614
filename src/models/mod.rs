//! Shared data models spanning the scanner layers.

pub mod candles;
pub mod indicators;
pub mod instrument;
pub mod record;

pub use candles::{CandleSeries, Kline, Phase, Timeframe};
pub use indicators::{IndicatorSet, MacdSeries};
pub use instrument::Instrument;
pub use record::{AcceptedRecord, TrendLabel};
