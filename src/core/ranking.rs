//! Ordering and per-timeframe partitioning of accepted records.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::candles::Timeframe;
use crate::models::record::AcceptedRecord;

/// Sort key for the report. Both orders are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RankingPolicy {
    /// 24-hour volume, highest first.
    #[default]
    Volume,
    /// Distance to the reference average, closest first.
    StopLoss,
}

impl FromStr for RankingPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "volume" => Ok(Self::Volume),
            "stop-loss" | "stop_loss" | "distance" => Ok(Self::StopLoss),
            other => Err(ConfigError::invalid("SCANNER_RANK_BY", other)),
        }
    }
}

impl RankingPolicy {
    pub fn sort(&self, records: &mut [AcceptedRecord]) {
        match self {
            RankingPolicy::Volume => {
                records.sort_by(|a, b| b.volume_24h.total_cmp(&a.volume_24h))
            }
            RankingPolicy::StopLoss => {
                records.sort_by(|a, b| a.stop_loss_pct.total_cmp(&b.stop_loss_pct))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeframeSection {
    pub timeframe: Timeframe,
    pub records: Vec<AcceptedRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedReport {
    pub ranking: RankingPolicy,
    pub sections: Vec<TimeframeSection>,
}

impl RankedReport {
    pub fn section(&self, timeframe: &Timeframe) -> Option<&TimeframeSection> {
        self.sections.iter().find(|s| &s.timeframe == timeframe)
    }

    pub fn total(&self) -> usize {
        self.sections.iter().map(|s| s.records.len()).sum()
    }
}

/// Sort every record once, then split by timeframe in `timeframes` order.
/// Each section keeps the global order.
pub fn rank(
    mut records: Vec<AcceptedRecord>,
    policy: RankingPolicy,
    timeframes: &[Timeframe],
) -> RankedReport {
    policy.sort(&mut records);

    let sections = timeframes
        .iter()
        .map(|timeframe| TimeframeSection {
            timeframe: timeframe.clone(),
            records: records
                .iter()
                .filter(|r| &r.timeframe == timeframe)
                .cloned()
                .collect(),
        })
        .collect();

    RankedReport {
        ranking: policy,
        sections,
    }
}
