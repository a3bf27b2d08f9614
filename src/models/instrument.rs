use serde::{Deserialize, Serialize};

pub const TRADING_STATUS: &str = "TRADING";

/// An entry of the venue's instrument universe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    pub symbol: String,
    pub quote_asset: String,
    pub status: String,
}

impl Instrument {
    pub fn new(
        symbol: impl Into<String>,
        quote_asset: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            quote_asset: quote_asset.into(),
            status: status.into(),
        }
    }

    pub fn is_tradable_in(&self, quote_asset: &str) -> bool {
        self.status == TRADING_STATUS && self.quote_asset == quote_asset
    }
}

/// Symbols of every trading instrument quoted in `quote_asset`, in venue order.
pub fn select_universe(instruments: &[Instrument], quote_asset: &str) -> Vec<String> {
    instruments
        .iter()
        .filter(|i| i.is_tradable_in(quote_asset))
        .map(|i| i.symbol.clone())
        .collect()
}
