//! SMA (Simple Moving Average) indicator

/// Arithmetic mean of the last `period` values.
///
/// `None` when `period == 0` or there are fewer than `period` values.
pub fn calculate_sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}

/// SMA with the undefined case collapsed to `0.0`, which is how the filter
/// consumes it.
pub fn sma_or_zero(values: &[f64], period: usize) -> f64 {
    calculate_sma(values, period).unwrap_or(0.0)
}
