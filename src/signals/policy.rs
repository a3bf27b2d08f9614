//! Ordered acceptance filter, expressed as swappable policies.
//!
//! Every policy runs the gates in a fixed order and stops at the first one
//! that fails.

use std::fmt;
use std::sync::Arc;

use crate::config::{FilterPolicyKind, Thresholds};
use crate::models::candles::Phase;
use crate::models::indicators::IndicatorSet;
use crate::signals::snapshot::MacdSnapshot;

/// Why a symbol was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Fewer than two bars to compare.
    InsufficientHistory,
    /// Price under EMA144 or EMA169.
    BelowTrendAverages,
    /// Price under SMA25.
    BelowMeanAverage,
    /// Short timeframe only: price under SMA100.
    BelowAlignmentAverage,
    /// Histogram positive on both of the last two bars.
    SustainedBullish,
    SignalNotAboveZero,
    NotConverging,
    NoCrossingMomentum,
}

impl Rejection {
    /// Filter stage the rejection belongs to.
    pub fn gate(&self) -> &'static str {
        match self {
            Rejection::InsufficientHistory => "history",
            Rejection::BelowTrendAverages => "uptrend",
            Rejection::BelowMeanAverage | Rejection::BelowAlignmentAverage => "mean_reversion",
            Rejection::SustainedBullish => "momentum",
            Rejection::SignalNotAboveZero
            | Rejection::NotConverging
            | Rejection::NoCrossingMomentum => "configuration",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::InsufficientHistory => "insufficient_history",
            Rejection::BelowTrendAverages => "below_trend_averages",
            Rejection::BelowMeanAverage => "below_mean_average",
            Rejection::BelowAlignmentAverage => "below_alignment_average",
            Rejection::SustainedBullish => "sustained_bullish",
            Rejection::SignalNotAboveZero => "signal_not_above_zero",
            Rejection::NotConverging => "not_converging",
            Rejection::NoCrossingMomentum => "no_crossing_momentum",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Everything a gate may look at.
#[derive(Debug, Clone, Copy)]
pub struct FilterInput<'a> {
    pub phase: Phase,
    pub indicators: &'a IndicatorSet,
    pub macd: MacdSnapshot,
    pub thresholds: &'a Thresholds,
}

pub trait FilterPolicy: Send + Sync {
    fn name(&self) -> &'static str;

    fn check(&self, input: &FilterInput<'_>) -> Result<(), Rejection>;
}

/// Stage 1: price at or above both long EMAs.
pub fn uptrend_gate(input: &FilterInput<'_>) -> Result<(), Rejection> {
    let price = input.indicators.price;
    if price < input.indicators.latest_ema_trend_fast()
        || price < input.indicators.latest_ema_trend_slow()
    {
        return Err(Rejection::BelowTrendAverages);
    }
    Ok(())
}

/// Stage 2: price at or above SMA25; on the short timeframe also SMA100.
///
/// SMA100 on the short timeframe approximates longer-horizon alignment. It is
/// a heuristic proxy, not the long timeframe's own average.
pub fn mean_reversion_gate(input: &FilterInput<'_>) -> Result<(), Rejection> {
    let price = input.indicators.price;
    if price < input.indicators.sma_short {
        return Err(Rejection::BelowMeanAverage);
    }
    if input.phase == Phase::Short && price < input.indicators.sma_alignment {
        return Err(Rejection::BelowAlignmentAverage);
    }
    Ok(())
}

/// Stage 3: no fresh signal while the histogram stays positive.
pub fn momentum_gate(input: &FilterInput<'_>) -> Result<(), Rejection> {
    if input.macd.sustained_bullish() {
        return Err(Rejection::SustainedBullish);
    }
    Ok(())
}

/// Stage 4: signal line above zero, lines converging or already tight, and
/// rotating toward (or just through) each other.
pub fn configuration_gate(input: &FilterInput<'_>) -> Result<(), Rejection> {
    let macd = &input.macd;
    if !macd.signal_above_zero() {
        return Err(Rejection::SignalNotAboveZero);
    }

    let tight = macd
        .relative_distance()
        .is_some_and(|rel| rel < input.thresholds.converged_rel);
    if !(macd.converging() || tight) {
        return Err(Rejection::NotConverging);
    }

    if !(macd.crossing_trend() || macd.fresh_bullish_cross()) {
        return Err(Rejection::NoCrossingMomentum);
    }
    Ok(())
}

/// The full four-stage filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvergencePolicy;

impl FilterPolicy for ConvergencePolicy {
    fn name(&self) -> &'static str {
        "convergence"
    }

    fn check(&self, input: &FilterInput<'_>) -> Result<(), Rejection> {
        uptrend_gate(input)?;
        mean_reversion_gate(input)?;
        momentum_gate(input)?;
        configuration_gate(input)
    }
}

/// Like [`ConvergencePolicy`], but a fresh bullish histogram cross with the
/// signal line above zero is accepted without the convergence requirement.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreshCrossPolicy;

impl FilterPolicy for FreshCrossPolicy {
    fn name(&self) -> &'static str {
        "fresh-cross"
    }

    fn check(&self, input: &FilterInput<'_>) -> Result<(), Rejection> {
        uptrend_gate(input)?;
        mean_reversion_gate(input)?;
        momentum_gate(input)?;
        if input.macd.fresh_bullish_cross() && input.macd.signal_above_zero() {
            return Ok(());
        }
        configuration_gate(input)
    }
}

pub fn build_policy(kind: FilterPolicyKind) -> Arc<dyn FilterPolicy> {
    match kind {
        FilterPolicyKind::Convergence => Arc::new(ConvergencePolicy),
        FilterPolicyKind::FreshCross => Arc::new(FreshCrossPolicy),
    }
}
