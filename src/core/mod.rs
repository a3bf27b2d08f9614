//! Core application primitives (store, orchestrator, ranking)

pub mod orchestrator;
pub mod ranking;
pub mod scan;
pub mod store;

pub use orchestrator::{ScanOrchestrator, ScanOutcome};
pub use ranking::{rank, RankedReport, RankingPolicy, TimeframeSection};
pub use scan::run_scan;
pub use store::{CrossTimeframeStore, ShortTimeframeAverages};
