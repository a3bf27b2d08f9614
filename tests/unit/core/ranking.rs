use macd_scanner::core::{rank, RankingPolicy};
use macd_scanner::models::candles::Timeframe;
use macd_scanner::models::record::{AcceptedRecord, TrendLabel};

fn record(symbol: &str, timeframe: Timeframe, volume: f64, stop_loss: f64) -> AcceptedRecord {
    AcceptedRecord {
        symbol: symbol.to_string(),
        timeframe,
        price: 1.0,
        sma_short: 1.0,
        ema_trend_fast: 1.0,
        ema_trend_slow: 1.0,
        macd: 0.1,
        signal: 0.1,
        histogram: 0.0,
        volume_24h: volume,
        stop_loss_pct: stop_loss,
        trend: TrendLabel::Approaching,
    }
}

fn symbols(records: &[AcceptedRecord]) -> Vec<&str> {
    records.iter().map(|r| r.symbol.as_str()).collect()
}

fn timeframes() -> [Timeframe; 2] {
    [Timeframe::short("1h"), Timeframe::long("4h")]
}

#[test]
fn test_volume_descending_within_partition() {
    let records = vec![
        record("LOW", Timeframe::short("1h"), 10.0, 0.0),
        record("HIGH", Timeframe::short("1h"), 1000.0, 0.0),
        record("MID", Timeframe::short("1h"), 100.0, 0.0),
        record("LONGLOW", Timeframe::long("4h"), 5.0, 0.0),
        record("LONGHIGH", Timeframe::long("4h"), 50.0, 0.0),
    ];
    let report = rank(records, RankingPolicy::Volume, &timeframes());

    assert_eq!(report.sections.len(), 2);
    assert_eq!(report.total(), 5);
    assert_eq!(symbols(&report.sections[0].records), ["HIGH", "MID", "LOW"]);
    assert_eq!(symbols(&report.sections[1].records), ["LONGHIGH", "LONGLOW"]);
    assert_eq!(report.sections[0].timeframe, Timeframe::short("1h"));
}

#[test]
fn test_equal_volumes_keep_arrival_order() {
    let records = vec![
        record("FIRST", Timeframe::short("1h"), 10.0, 0.0),
        record("SECOND", Timeframe::short("1h"), 10.0, 0.0),
        record("THIRD", Timeframe::short("1h"), 10.0, 0.0),
    ];
    let report = rank(records, RankingPolicy::Volume, &timeframes());
    assert_eq!(
        symbols(&report.sections[0].records),
        ["FIRST", "SECOND", "THIRD"]
    );
}

#[test]
fn test_empty_partitions_still_present() {
    let report = rank(Vec::new(), RankingPolicy::Volume, &timeframes());
    assert_eq!(report.sections.len(), 2);
    assert!(report.section(&Timeframe::long("4h")).unwrap().records.is_empty());
    assert_eq!(report.total(), 0);
}

#[test]
fn test_stop_loss_ascending() {
    let records = vec![
        record("FAR", Timeframe::long("4h"), 1000.0, 12.0),
        record("NEAR", Timeframe::long("4h"), 1.0, 0.5),
        record("MID", Timeframe::long("4h"), 10.0, 3.0),
    ];
    let report = rank(records, RankingPolicy::StopLoss, &timeframes());
    assert_eq!(report.ranking, RankingPolicy::StopLoss);
    assert_eq!(symbols(&report.sections[1].records), ["NEAR", "MID", "FAR"]);
}

#[test]
fn test_ranking_policy_from_str() {
    assert_eq!("volume".parse::<RankingPolicy>().unwrap(), RankingPolicy::Volume);
    assert_eq!("Stop-Loss".parse::<RankingPolicy>().unwrap(), RankingPolicy::StopLoss);
    assert_eq!("distance".parse::<RankingPolicy>().unwrap(), RankingPolicy::StopLoss);
    assert!("alphabetical".parse::<RankingPolicy>().is_err());
}
