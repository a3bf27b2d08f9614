//! EMA (Exponential Moving Average) indicator

/// Smoothing factor `2 / (period + 1)`.
pub fn smoothing(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// One recursive EMA step.
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    (value - previous) * smoothing(period) + previous
}

/// Full EMA sequence, same length as `values`.
///
/// Seeded with the first raw value (`ema[0] == values[0]`), not with an SMA
/// warm-up. Filter thresholds are calibrated against this seeding.
/// Returns an empty vector for empty input or `period == 0`.
pub fn calculate_ema(values: &[f64], period: usize) -> Vec<f64> {
    let Some(&first) = values.first() else {
        return Vec::new();
    };
    if period == 0 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(values.len());
    out.push(first);
    for &value in &values[1..] {
        let previous = out[out.len() - 1];
        out.push(ema_from_previous(value, previous, period));
    }
    out
}

/// Latest EMA value, if any.
pub fn latest_ema(values: &[f64], period: usize) -> Option<f64> {
    calculate_ema(values, period).last().copied()
}
