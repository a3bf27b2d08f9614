//! Two-timeframe MACD pre-crossover scanner.
//!
//! Fetches recent candles for every tradable instrument on a short and a long
//! timeframe, derives trend and momentum indicators, and keeps the symbols
//! whose MACD and signal lines are about to cross (or just crossed) bullish.

pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod report;
pub mod services;
pub mod signals;
