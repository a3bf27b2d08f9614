use crate::config::IndicatorParams;
use crate::indicators::momentum::calculate_macd;
use crate::indicators::trend::{calculate_ema, sma_or_zero};
use crate::models::indicators::IndicatorSet;

/// Derive every indicator the filter needs from one close series.
///
/// Returns `None` for an empty series; length floors are the fetcher's job.
pub fn compute_indicator_set(closes: &[f64], params: &IndicatorParams) -> Option<IndicatorSet> {
    let price = *closes.last()?;

    Some(IndicatorSet {
        price,
        sma_short: sma_or_zero(closes, params.sma_short),
        sma_alignment: sma_or_zero(closes, params.sma_alignment),
        ema_trend_fast: calculate_ema(closes, params.ema_trend_fast),
        ema_trend_slow: calculate_ema(closes, params.ema_trend_slow),
        macd: calculate_macd(
            closes,
            params.macd_fast,
            params.macd_slow,
            params.macd_signal,
        ),
    })
}
