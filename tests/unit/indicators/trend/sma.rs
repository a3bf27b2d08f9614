//! Unit tests for SMA indicator

use macd_scanner::indicators::trend::{calculate_sma, sma_or_zero};

#[test]
fn test_sma_uses_trailing_window() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    assert_eq!(calculate_sma(&values, 3), Some(5.0));
    assert_eq!(calculate_sma(&values, 6), Some(3.5));
}

#[test]
fn test_sma_insufficient_data() {
    let values = [1.0, 2.0, 3.0];
    assert_eq!(calculate_sma(&values, 4), None);
    assert_eq!(sma_or_zero(&values, 4), 0.0);
}

#[test]
fn test_sma_zero_period_is_undefined() {
    let values = [1.0, 2.0, 3.0];
    assert_eq!(calculate_sma(&values, 0), None);
    assert_eq!(sma_or_zero(&values, 0), 0.0);
}

#[test]
fn test_sma_of_constant_series() {
    let values = vec![42.0; 40];
    assert_eq!(calculate_sma(&values, 25), Some(42.0));
}
