//! Pure indicator computations. No state, no I/O.

pub mod momentum;
pub mod set;
pub mod trend;

pub use momentum::{calculate_macd, calculate_macd_default};
pub use set::compute_indicator_set;
pub use trend::{calculate_ema, calculate_sma, sma_or_zero};
