//! Two-phase bounded-concurrency scan.
//!
//! Phase 1 runs every symbol on the short timeframe and must fully finish
//! before phase 2 runs them on the long timeframe: phase 2 stop-losses read
//! the SMA25 values phase 1 wrote. Within a phase, a semaphore admits at most
//! `concurrency` tasks at once and gives no ordering guarantee. Accepted
//! records flow over a channel to a single collector task.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use futures_util::future::join_all;
use tokio::sync::{mpsc, Semaphore};
use tracing::{debug, info, warn};

use crate::config::ScannerConfig;
use crate::core::store::{CrossTimeframeStore, ShortTimeframeAverages};
use crate::error::ScanError;
use crate::metrics::ScanMetrics;
use crate::models::candles::Timeframe;
use crate::models::record::AcceptedRecord;
use crate::services::fetcher::CandleFetcher;
use crate::signals::evaluator::SignalEvaluator;

/// Store handle a task sees, fixed per phase.
#[derive(Clone)]
enum PhaseStore {
    Short(Arc<CrossTimeframeStore>),
    Long(Arc<ShortTimeframeAverages>),
}

struct TaskContext {
    fetcher: CandleFetcher,
    evaluator: SignalEvaluator,
    metrics: Option<Arc<ScanMetrics>>,
    volumes: Arc<HashMap<String, f64>>,
}

/// Records from both phases plus the frozen phase 1 averages.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub records: Vec<AcceptedRecord>,
    pub short_averages: ShortTimeframeAverages,
}

pub struct ScanOrchestrator {
    fetcher: CandleFetcher,
    evaluator: SignalEvaluator,
    short: Timeframe,
    long: Timeframe,
    concurrency: usize,
    metrics: Option<Arc<ScanMetrics>>,
}

impl ScanOrchestrator {
    pub fn new(
        fetcher: CandleFetcher,
        evaluator: SignalEvaluator,
        short: Timeframe,
        long: Timeframe,
        concurrency: usize,
    ) -> Self {
        Self {
            fetcher,
            evaluator,
            short,
            long,
            concurrency: concurrency.max(1),
            metrics: None,
        }
    }

    pub fn from_config(fetcher: CandleFetcher, config: &ScannerConfig) -> Self {
        Self::new(
            fetcher,
            SignalEvaluator::from_config(config),
            config.short(),
            config.long(),
            config.concurrency,
        )
    }

    pub fn with_metrics(mut self, metrics: Arc<ScanMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn timeframes(&self) -> [Timeframe; 2] {
        [self.short.clone(), self.long.clone()]
    }

    pub async fn run(
        &self,
        symbols: &[String],
        volumes: Arc<HashMap<String, f64>>,
    ) -> Result<ScanOutcome, ScanError> {
        let ctx = Arc::new(TaskContext {
            fetcher: self.fetcher.clone(),
            evaluator: self.evaluator.clone(),
            metrics: self.metrics.clone(),
            volumes,
        });

        let (tx, rx) = mpsc::channel(self.concurrency);
        let collector = tokio::spawn(collect_records(rx));

        let store = Arc::new(CrossTimeframeStore::new());
        self.run_phase(&self.short, symbols, PhaseStore::Short(store.clone()), &ctx, &tx)
            .await;

        // Every phase 1 task has been joined; nothing writes to `store` again.
        let averages = Arc::new(store.freeze());
        info!(
            entries = averages.len(),
            "ScanOrchestrator: froze {} short timeframe averages",
            averages.len()
        );

        self.run_phase(&self.long, symbols, PhaseStore::Long(averages.clone()), &ctx, &tx)
            .await;

        drop(tx);
        let records = collector.await?;

        Ok(ScanOutcome {
            records,
            short_averages: averages.as_ref().clone(),
        })
    }

    /// Dispatch one task per symbol and wait for all of them.
    async fn run_phase(
        &self,
        timeframe: &Timeframe,
        symbols: &[String],
        store: PhaseStore,
        ctx: &Arc<TaskContext>,
        records: &mpsc::Sender<AcceptedRecord>,
    ) {
        let started = Instant::now();
        info!(
            timeframe = %timeframe,
            symbols = symbols.len(),
            concurrency = self.concurrency,
            "ScanOrchestrator: starting {} phase on {} symbols",
            timeframe,
            symbols.len()
        );

        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks = Vec::with_capacity(symbols.len());

        for symbol in symbols {
            let semaphore = semaphore.clone();
            let ctx = ctx.clone();
            let store = store.clone();
            let records = records.clone();
            let symbol = symbol.clone();
            let timeframe = timeframe.clone();

            tasks.push(tokio::spawn(async move {
                let Ok(_permit) = semaphore.acquire_owned().await else {
                    return;
                };
                scan_symbol(&ctx, &symbol, &timeframe, &store, &records).await;
            }));
        }

        for (symbol, result) in symbols.iter().zip(join_all(tasks).await) {
            if let Err(e) = result {
                warn!(
                    symbol = %symbol,
                    timeframe = %timeframe,
                    error = %e,
                    "ScanOrchestrator: task for {} aborted",
                    symbol
                );
            }
        }

        info!(
            timeframe = %timeframe,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "ScanOrchestrator: {} phase complete",
            timeframe
        );
    }
}

/// Fetch, evaluate, and forward one (symbol, timeframe). Every failure ends
/// here.
async fn scan_symbol(
    ctx: &TaskContext,
    symbol: &str,
    timeframe: &Timeframe,
    store: &PhaseStore,
    records: &mpsc::Sender<AcceptedRecord>,
) {
    let phase = timeframe.phase;
    if let Some(metrics) = &ctx.metrics {
        metrics.record_task(phase);
    }

    let started = Instant::now();
    let fetched = ctx.fetcher.fetch(symbol, timeframe).await;
    if let Some(metrics) = &ctx.metrics {
        metrics
            .fetch_duration_seconds
            .observe(started.elapsed().as_secs_f64());
    }

    let series = match fetched {
        Ok(series) => series,
        Err(e) => {
            debug!(
                symbol = %symbol,
                timeframe = %timeframe,
                kind = e.kind(),
                error = %e,
                "Skipping {} on {}: {}",
                symbol,
                timeframe,
                e
            );
            if let Some(metrics) = &ctx.metrics {
                metrics.record_fetch_failure(phase, e.kind());
            }
            return;
        }
    };

    let volume = ctx.volumes.get(symbol).copied().unwrap_or(0.0);
    let outcome = match store {
        PhaseStore::Short(store) => ctx.evaluator.evaluate_short(&series, store, volume),
        PhaseStore::Long(averages) => ctx.evaluator.evaluate_long(&series, averages, volume),
    };

    match outcome {
        Ok(record) => {
            info!(
                symbol = %symbol,
                timeframe = %timeframe,
                trend = %record.trend,
                volume_24h = record.volume_24h,
                stop_loss_pct = record.stop_loss_pct,
                "Accepted {} on {}",
                symbol,
                timeframe
            );
            if let Some(metrics) = &ctx.metrics {
                metrics.record_accepted(phase);
            }
            if records.send(record).await.is_err() {
                warn!(symbol = %symbol, "Result collector closed; dropping record for {}", symbol);
            }
        }
        Err(rejection) => {
            debug!(
                symbol = %symbol,
                timeframe = %timeframe,
                gate = rejection.gate(),
                reason = %rejection,
                "Rejected {} on {}",
                symbol,
                timeframe
            );
            if let Some(metrics) = &ctx.metrics {
                metrics.record_rejection(phase, rejection.gate());
            }
        }
    }
}

async fn collect_records(mut rx: mpsc::Receiver<AcceptedRecord>) -> Vec<AcceptedRecord> {
    let mut records = Vec::new();
    while let Some(record) = rx.recv().await {
        records.push(record);
    }
    records
}
