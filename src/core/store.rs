//! Short-timeframe SMA25 per symbol, handed from phase 1 to phase 2.
//!
//! Phase 1 tasks write into a [`CrossTimeframeStore`]. Once every phase 1
//! task has finished, the orchestrator freezes it into a
//! [`ShortTimeframeAverages`] snapshot that phase 2 tasks can only read.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use tracing::warn;

#[derive(Debug, Default)]
pub struct CrossTimeframeStore {
    entries: RwLock<HashMap<String, f64>>,
}

impl CrossTimeframeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the short-timeframe average for `symbol`.
    ///
    /// The first write wins; returns `false` if the symbol already had one.
    pub fn record(&self, symbol: &str, sma_short: f64) -> bool {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if entries.contains_key(symbol) {
            warn!(symbol = %symbol, "CrossTimeframeStore: duplicate write ignored for {}", symbol);
            return false;
        }
        entries.insert(symbol.to_string(), sma_short);
        true
    }

    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(symbol)
            .copied()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read-only copy of everything written so far.
    pub fn freeze(&self) -> ShortTimeframeAverages {
        let entries = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        ShortTimeframeAverages { entries }
    }
}

/// Frozen phase 1 output. No write access exists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShortTimeframeAverages {
    entries: HashMap<String, f64>,
}

impl ShortTimeframeAverages {
    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.entries.get(symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, f64)> for ShortTimeframeAverages {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
