//! Applies the acceptance policy to one symbol's series for one timeframe.

use std::sync::Arc;

use tracing::debug;

use crate::config::{IndicatorParams, ScannerConfig, Thresholds};
use crate::core::store::{CrossTimeframeStore, ShortTimeframeAverages};
use crate::indicators::compute_indicator_set;
use crate::models::candles::{CandleSeries, Phase};
use crate::models::indicators::IndicatorSet;
use crate::models::record::AcceptedRecord;
use crate::signals::policy::{build_policy, ConvergencePolicy, FilterInput, FilterPolicy, Rejection};
use crate::signals::snapshot::MacdSnapshot;
use crate::signals::trend::classify_trend;

/// `|price - reference| / reference * 100`, or `0.0` for a zero reference.
pub fn stop_loss_pct(price: f64, reference: f64) -> f64 {
    if reference == 0.0 {
        return 0.0;
    }
    (price - reference).abs() / reference * 100.0
}

#[derive(Clone)]
pub struct SignalEvaluator {
    params: IndicatorParams,
    thresholds: Thresholds,
    policy: Arc<dyn FilterPolicy>,
}

impl SignalEvaluator {
    pub fn new(params: IndicatorParams, thresholds: Thresholds, policy: Arc<dyn FilterPolicy>) -> Self {
        Self {
            params,
            thresholds,
            policy,
        }
    }

    pub fn from_config(config: &ScannerConfig) -> Self {
        Self::new(
            config.indicators.clone(),
            config.thresholds.clone(),
            build_policy(config.filter_policy),
        )
    }

    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Short timeframe pass.
    ///
    /// The series' SMA25 is written to `store` before any gate runs, so the
    /// long pass has it even when this symbol is rejected here.
    pub fn evaluate_short(
        &self,
        series: &CandleSeries,
        store: &CrossTimeframeStore,
        volume_24h: f64,
    ) -> Result<AcceptedRecord, Rejection> {
        let indicators = self.indicators(series)?;
        store.record(&series.symbol, indicators.sma_short);

        let stop_loss = stop_loss_pct(indicators.price, indicators.sma_short);
        self.apply(series, Phase::Short, &indicators, volume_24h, stop_loss)
    }

    /// Long timeframe pass. Stop-loss is measured against the short
    /// timeframe's SMA25 for this symbol, `0.0` when there is none.
    pub fn evaluate_long(
        &self,
        series: &CandleSeries,
        averages: &ShortTimeframeAverages,
        volume_24h: f64,
    ) -> Result<AcceptedRecord, Rejection> {
        let indicators = self.indicators(series)?;

        let stop_loss = averages
            .get(&series.symbol)
            .map(|reference| stop_loss_pct(indicators.price, reference))
            .unwrap_or(0.0);
        self.apply(series, Phase::Long, &indicators, volume_24h, stop_loss)
    }

    fn indicators(&self, series: &CandleSeries) -> Result<IndicatorSet, Rejection> {
        compute_indicator_set(series.closes(), &self.params).ok_or(Rejection::InsufficientHistory)
    }

    fn apply(
        &self,
        series: &CandleSeries,
        phase: Phase,
        indicators: &IndicatorSet,
        volume_24h: f64,
        stop_loss_pct: f64,
    ) -> Result<AcceptedRecord, Rejection> {
        let macd = MacdSnapshot::from_series(&indicators.macd).ok_or(Rejection::InsufficientHistory)?;

        let input = FilterInput {
            phase,
            indicators,
            macd,
            thresholds: &self.thresholds,
        };
        self.policy.check(&input)?;

        let trend = classify_trend(&macd, &self.thresholds);
        debug!(
            symbol = %series.symbol,
            timeframe = %series.timeframe,
            policy = self.policy.name(),
            trend = %trend,
            "SignalEvaluator: {} accepted on {}",
            series.symbol,
            series.timeframe
        );

        Ok(AcceptedRecord {
            symbol: series.symbol.clone(),
            timeframe: series.timeframe.clone(),
            price: indicators.price,
            sma_short: indicators.sma_short,
            ema_trend_fast: indicators.latest_ema_trend_fast(),
            ema_trend_slow: indicators.latest_ema_trend_slow(),
            macd: macd.macd,
            signal: macd.signal,
            histogram: macd.histogram,
            volume_24h,
            stop_loss_pct,
            trend,
        })
    }
}

impl Default for SignalEvaluator {
    fn default() -> Self {
        Self::new(
            IndicatorParams::default(),
            Thresholds::default(),
            Arc::new(ConvergencePolicy),
        )
    }
}
