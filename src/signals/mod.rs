//! Signal evaluation: the ordered acceptance filter and its outputs.

pub mod evaluator;
pub mod policy;
pub mod snapshot;
pub mod trend;

pub use evaluator::{stop_loss_pct, SignalEvaluator};
pub use policy::{
    build_policy, ConvergencePolicy, FilterInput, FilterPolicy, FreshCrossPolicy, Rejection,
};
pub use snapshot::MacdSnapshot;
pub use trend::classify_trend;
