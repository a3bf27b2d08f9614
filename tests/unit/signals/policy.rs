use macd_scanner::config::Thresholds;
use macd_scanner::models::candles::Phase;
use macd_scanner::models::indicators::{IndicatorSet, MacdSeries};
use macd_scanner::signals::policy::{
    configuration_gate, mean_reversion_gate, momentum_gate, uptrend_gate,
};
use macd_scanner::signals::{
    ConvergencePolicy, FilterInput, FilterPolicy, FreshCrossPolicy, MacdSnapshot, Rejection,
};

fn indicators(price: f64, sma_short: f64, sma_alignment: f64, ema_fast: f64, ema_slow: f64) -> IndicatorSet {
    IndicatorSet {
        price,
        sma_short,
        sma_alignment,
        ema_trend_fast: vec![ema_fast],
        ema_trend_slow: vec![ema_slow],
        macd: MacdSeries::default(),
    }
}

fn healthy() -> IndicatorSet {
    indicators(110.0, 100.0, 100.0, 90.0, 85.0)
}

fn snap(macd: f64, signal: f64, histogram: f64, prev_macd: f64, prev_signal: f64, prev_histogram: f64) -> MacdSnapshot {
    MacdSnapshot {
        macd,
        signal,
        histogram,
        prev_macd,
        prev_signal,
        prev_histogram,
    }
}

/// Below the signal line, closing in, histogram still negative.
fn approaching() -> MacdSnapshot {
    snap(0.8, 1.0, -0.2, 0.6, 0.95, -0.35)
}

fn input<'a>(phase: Phase, set: &'a IndicatorSet, macd: MacdSnapshot, thresholds: &'a Thresholds) -> FilterInput<'a> {
    FilterInput {
        phase,
        indicators: set,
        macd,
        thresholds,
    }
}

#[test]
fn test_uptrend_gate() {
    let t = Thresholds::default();
    let below_fast = indicators(100.0, 90.0, 90.0, 101.0, 95.0);
    let below_slow = indicators(100.0, 90.0, 90.0, 95.0, 101.0);
    let equal = indicators(100.0, 90.0, 90.0, 100.0, 100.0);

    assert_eq!(
        uptrend_gate(&input(Phase::Short, &below_fast, approaching(), &t)),
        Err(Rejection::BelowTrendAverages)
    );
    assert_eq!(
        uptrend_gate(&input(Phase::Long, &below_slow, approaching(), &t)),
        Err(Rejection::BelowTrendAverages)
    );
    assert_eq!(uptrend_gate(&input(Phase::Short, &equal, approaching(), &t)), Ok(()));
}

#[test]
fn test_mean_reversion_gate_alignment_only_on_short() {
    let t = Thresholds::default();
    let below_mean = indicators(100.0, 101.0, 50.0, 90.0, 90.0);
    let below_alignment = indicators(100.0, 95.0, 120.0, 90.0, 90.0);

    assert_eq!(
        mean_reversion_gate(&input(Phase::Long, &below_mean, approaching(), &t)),
        Err(Rejection::BelowMeanAverage)
    );
    assert_eq!(
        mean_reversion_gate(&input(Phase::Short, &below_alignment, approaching(), &t)),
        Err(Rejection::BelowAlignmentAverage)
    );
    assert_eq!(
        mean_reversion_gate(&input(Phase::Long, &below_alignment, approaching(), &t)),
        Ok(())
    );
}

#[test]
fn test_momentum_gate() {
    let t = Thresholds::default();
    let set = healthy();
    let sustained = snap(1.2, 1.0, 0.2, 1.1, 0.98, 0.12);
    let fresh = snap(1.01, 1.0, 0.01, 0.99, 1.0, -0.01);

    assert_eq!(
        momentum_gate(&input(Phase::Short, &set, sustained, &t)),
        Err(Rejection::SustainedBullish)
    );
    assert_eq!(momentum_gate(&input(Phase::Short, &set, fresh, &t)), Ok(()));
    assert_eq!(momentum_gate(&input(Phase::Short, &set, approaching(), &t)), Ok(()));
}

#[test]
fn test_configuration_gate_signal_must_be_positive() {
    let t = Thresholds::default();
    let set = healthy();
    let zero = snap(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    let negative = snap(-0.8, -1.0, 0.2, -0.9, -1.0, 0.1);

    assert_eq!(
        configuration_gate(&input(Phase::Short, &set, zero, &t)),
        Err(Rejection::SignalNotAboveZero)
    );
    assert_eq!(
        configuration_gate(&input(Phase::Short, &set, negative, &t)),
        Err(Rejection::SignalNotAboveZero)
    );
}

#[test]
fn test_configuration_gate_requires_convergence_or_tight_lines() {
    let t = Thresholds::default();
    let set = healthy();
    // gap widened from 0.3 to 0.5, 50% of the signal line
    let diverging = snap(0.5, 1.0, -0.5, 0.7, 1.0, -0.3);
    assert_eq!(
        configuration_gate(&input(Phase::Short, &set, diverging, &t)),
        Err(Rejection::NotConverging)
    );

    // gap widened but only 3% of the signal line, histogram just turned up
    let tight = snap(1.03, 1.0, 0.03, 0.99, 1.0, -0.01);
    assert!(!tight.converging());
    assert!(tight.fresh_bullish_cross());
    assert_eq!(configuration_gate(&input(Phase::Short, &set, tight, &t)), Ok(()));
}

#[test]
fn test_configuration_gate_requires_crossing_momentum() {
    let t = Thresholds::default();
    let set = healthy();
    // lines within 2%, macd above and pulling away, histogram negative on both bars
    let drifting = snap(1.02, 1.0, -0.01, 1.0, 1.0, -0.01);
    assert!(!drifting.crossing_trend());
    assert!(!drifting.fresh_bullish_cross());
    assert_eq!(
        configuration_gate(&input(Phase::Short, &set, drifting, &t)),
        Err(Rejection::NoCrossingMomentum)
    );
}

#[test]
fn test_policies_short_circuit_in_order() {
    let t = Thresholds::default();
    // fails uptrend and mean reversion; uptrend is reported
    let set = indicators(100.0, 120.0, 120.0, 110.0, 110.0);
    let sustained = snap(1.2, 1.0, 0.2, 1.1, 0.98, 0.12);
    assert_eq!(
        ConvergencePolicy.check(&input(Phase::Short, &set, sustained, &t)),
        Err(Rejection::BelowTrendAverages)
    );
    assert_eq!(
        FreshCrossPolicy.check(&input(Phase::Short, &set, sustained, &t)),
        Err(Rejection::BelowTrendAverages)
    );
}

#[test]
fn test_fresh_cross_policy_skips_convergence() {
    let t = Thresholds::default();
    let set = healthy();
    // fresh cross, gap wide and widening
    let wide_cross = snap(1.3, 1.0, 0.3, 0.9, 1.0, -0.1);
    assert_eq!(
        ConvergencePolicy.check(&input(Phase::Long, &set, wide_cross, &t)),
        Err(Rejection::NotConverging)
    );
    assert_eq!(FreshCrossPolicy.check(&input(Phase::Long, &set, wide_cross, &t)), Ok(()));

    // without a fresh cross it behaves like the convergence policy
    let diverging = snap(0.5, 1.0, -0.5, 0.7, 1.0, -0.3);
    assert_eq!(
        FreshCrossPolicy.check(&input(Phase::Long, &set, diverging, &t)),
        Err(Rejection::NotConverging)
    );
}

#[test]
fn test_rejection_gate_names() {
    assert_eq!(Rejection::BelowTrendAverages.gate(), "uptrend");
    assert_eq!(Rejection::BelowAlignmentAverage.gate(), "mean_reversion");
    assert_eq!(Rejection::SustainedBullish.gate(), "momentum");
    assert_eq!(Rejection::SignalNotAboveZero.gate(), "configuration");
    assert_eq!(Rejection::NoCrossingMomentum.to_string(), "no_crossing_momentum");
}
