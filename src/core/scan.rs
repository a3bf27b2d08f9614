//! One full scan: universe, volumes, both phases, ranking.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::config::ScannerConfig;
use crate::core::orchestrator::ScanOrchestrator;
use crate::core::ranking::{rank, RankedReport};
use crate::error::ScanError;
use crate::metrics::ScanMetrics;
use crate::models::instrument::select_universe;
use crate::services::fetcher::CandleFetcher;
use crate::services::market_data::MarketDataProvider;

/// Run a scan against `provider`.
///
/// Only a failed universe retrieval is fatal. A failed volume lookup leaves
/// every volume at `0.0`.
pub async fn run_scan(
    provider: Arc<dyn MarketDataProvider>,
    config: &ScannerConfig,
    metrics: Option<Arc<ScanMetrics>>,
) -> Result<RankedReport, ScanError> {
    let instruments = provider.list_instruments().await.map_err(|e| {
        error!(error = %e, "Failed to retrieve instrument universe");
        ScanError::UniverseRetrieval(e)
    })?;

    let symbols = select_universe(&instruments, &config.quote_asset);
    info!(
        listed = instruments.len(),
        selected = symbols.len(),
        quote_asset = %config.quote_asset,
        "Scanning {} {} instruments",
        symbols.len(),
        config.quote_asset
    );

    let volumes = match provider.get_24h_volumes().await {
        Ok(volumes) => volumes,
        Err(e) => {
            warn!(error = %e, "Failed to retrieve 24h volumes; ranking with zero volume");
            HashMap::new()
        }
    };

    let fetcher = CandleFetcher::from_config(provider, config);
    let mut orchestrator = ScanOrchestrator::from_config(fetcher, config);
    if let Some(metrics) = metrics {
        orchestrator = orchestrator.with_metrics(metrics);
    }

    let outcome = orchestrator.run(&symbols, Arc::new(volumes)).await?;
    let report = rank(outcome.records, config.ranking, &orchestrator.timeframes());

    info!(
        accepted = report.total(),
        "Scan complete: {} records accepted",
        report.total()
    );
    Ok(report)
}
