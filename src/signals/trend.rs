use crate::config::Thresholds;
use crate::models::record::TrendLabel;
use crate::signals::snapshot::MacdSnapshot;

/// Label the MACD/signal configuration of an accepted symbol.
pub fn classify_trend(snapshot: &MacdSnapshot, thresholds: &Thresholds) -> TrendLabel {
    if snapshot.histogram > 0.0 {
        return TrendLabel::AlreadyCrossedBullish;
    }
    if snapshot.distance() < thresholds.imminent_abs {
        return TrendLabel::ImminentCross;
    }
    match snapshot.relative_distance() {
        Some(rel) if rel < thresholds.entangled_rel => TrendLabel::Entangled,
        _ => TrendLabel::Approaching,
    }
}
