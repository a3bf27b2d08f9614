use macd_scanner::config::IndicatorParams;
use macd_scanner::indicators::{calculate_sma, compute_indicator_set};

use crate::fixtures;

#[test]
fn test_indicator_set_short_history_sma_alignment_is_zero() {
    let closes = fixtures::fresh_bullish_cross();
    let set = compute_indicator_set(&closes, &IndicatorParams::default()).unwrap();

    assert_eq!(set.price, 178.0);
    assert_eq!(Some(set.sma_short), calculate_sma(&closes, 25));
    assert_eq!(set.sma_alignment, 0.0);
    assert_eq!(set.ema_trend_fast.len(), closes.len());
    assert_eq!(set.ema_trend_slow.len(), closes.len());
    assert_eq!(set.macd.len(), closes.len());
}

#[test]
fn test_indicator_set_long_history() {
    let closes = fixtures::below_alignment();
    let set = compute_indicator_set(&closes, &IndicatorParams::default()).unwrap();
    assert_eq!(set.sma_short, 177.0);
    assert!((set.sma_alignment - 207.8).abs() < 1e-9);
}

#[test]
fn test_indicator_set_empty_series() {
    assert!(compute_indicator_set(&[], &IndicatorParams::default()).is_none());
}
