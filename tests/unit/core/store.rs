use std::sync::Arc;
use std::thread;

use macd_scanner::core::{CrossTimeframeStore, ShortTimeframeAverages};

#[test]
fn test_record_and_get() {
    let store = CrossTimeframeStore::new();
    assert!(store.is_empty());
    assert!(store.record("BTCUSDT", 42_000.0));
    assert_eq!(store.get("BTCUSDT"), Some(42_000.0));
    assert_eq!(store.get("ETHUSDT"), None);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_first_write_wins() {
    let store = CrossTimeframeStore::new();
    assert!(store.record("BTCUSDT", 1.0));
    assert!(!store.record("BTCUSDT", 2.0));
    assert_eq!(store.get("BTCUSDT"), Some(1.0));
}

#[test]
fn test_freeze_is_a_snapshot() {
    let store = CrossTimeframeStore::new();
    store.record("BTCUSDT", 1.0);
    let frozen = store.freeze();
    store.record("ETHUSDT", 2.0);

    assert_eq!(frozen.len(), 1);
    assert_eq!(frozen.get("BTCUSDT"), Some(1.0));
    assert_eq!(frozen.get("ETHUSDT"), None);
}

#[test]
fn test_concurrent_writers() {
    let store = Arc::new(CrossTimeframeStore::new());
    let handles: Vec<_> = (0..16)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.record(&format!("SYM{i}USDT"), i as f64))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
    assert_eq!(store.len(), 16);
    assert_eq!(store.get("SYM7USDT"), Some(7.0));
}

#[test]
fn test_averages_from_iter() {
    let averages: ShortTimeframeAverages = vec![
        ("BTCUSDT".to_string(), 1.0),
        ("ETHUSDT".to_string(), 2.0),
    ]
    .into_iter()
    .collect();
    assert_eq!(averages.len(), 2);
    assert_eq!(averages.get("ETHUSDT"), Some(2.0));
    assert!(ShortTimeframeAverages::default().is_empty());
}
