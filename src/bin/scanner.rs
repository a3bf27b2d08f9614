//! MACD Scanner
//!
//! Runs one two-timeframe scan over the venue's tradable universe and prints
//! the ranked report to stdout.

use dotenvy::dotenv;
use macd_scanner::config::{OutputFormat, ScannerConfig};
use macd_scanner::core::run_scan;
use macd_scanner::logging;
use macd_scanner::metrics::ScanMetrics;
use macd_scanner::report::{render_json, render_table};
use macd_scanner::services::binance::BinanceFuturesProvider;
use macd_scanner::services::market_data::MarketDataProvider;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = ScannerConfig::from_env();
    config.validate()?;

    info!(
        environment = %config.environment,
        production = config.is_production(),
        base_url = %config.venue.base_url,
        proxy = config.venue.proxy_url.is_some(),
        short = %config.short_timeframe,
        long = %config.long_timeframe,
        concurrency = config.concurrency,
        timeout_ms = config.fetch_timeout.as_millis() as u64,
        policy = ?config.filter_policy,
        ranking = ?config.ranking,
        "Starting MACD scanner"
    );

    let metrics = Arc::new(ScanMetrics::new()?);
    let provider: Arc<dyn MarketDataProvider> =
        Arc::new(BinanceFuturesProvider::new(&config.venue)?);

    let started = Instant::now();
    let report = run_scan(provider, &config, Some(metrics.clone())).await?;
    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        accepted = report.total(),
        "Scan finished"
    );

    let rendered = match config.output {
        OutputFormat::Table => render_table(&report),
        OutputFormat::Json => render_json(&report)?,
    };
    println!("{}", rendered);

    match metrics.export() {
        Ok(text) => debug!(metrics = %text, "Scan metrics"),
        Err(e) => warn!(error = %e, "Failed to export scan metrics"),
    }

    Ok(())
}
