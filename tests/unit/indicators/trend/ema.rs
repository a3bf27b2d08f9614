//! Unit tests for EMA indicator

use macd_scanner::indicators::trend::{calculate_ema, ema_from_previous, latest_ema, smoothing};

#[test]
fn test_ema_same_length_and_raw_seed() {
    let values: Vec<f64> = (0..50).map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0).collect();
    for period in [1, 2, 9, 12, 26, 144, 169] {
        let ema = calculate_ema(&values, period);
        assert_eq!(ema.len(), values.len(), "period {}", period);
        assert_eq!(ema[0], values[0], "period {}", period);
    }
}

#[test]
fn test_ema_recursive_form() {
    let values = [10.0, 20.0, 30.0];
    let ema = calculate_ema(&values, 3);
    // k = 2 / 4 = 0.5
    assert_eq!(ema, vec![10.0, 15.0, 22.5]);
    assert_eq!(smoothing(3), 0.5);
    assert_eq!(ema_from_previous(30.0, 15.0, 3), 22.5);
}

#[test]
fn test_ema_single_value() {
    assert_eq!(calculate_ema(&[7.0], 12), vec![7.0]);
}

#[test]
fn test_ema_empty_or_zero_period() {
    assert!(calculate_ema(&[], 12).is_empty());
    assert!(calculate_ema(&[1.0, 2.0], 0).is_empty());
    assert_eq!(latest_ema(&[], 12), None);
}

#[test]
fn test_ema_constant_series_is_flat() {
    let values = vec![100.0; 60];
    let ema = calculate_ema(&values, 144);
    assert!(ema.iter().all(|&v| v == 100.0));
}

#[test]
fn test_ema_change_only_affects_later_indices() {
    let original: Vec<f64> = (0..60).map(|i| 50.0 + i as f64 * 0.3).collect();
    let mut changed = original.clone();
    changed[20] += 5.0;

    let a = calculate_ema(&original, 12);
    let b = calculate_ema(&changed, 12);

    assert_eq!(a[..20], b[..20]);
    for i in 20..60 {
        assert_ne!(a[i], b[i], "index {}", i);
    }
}
