//! Prometheus counters for one scan run.
//!
//! Registered on a private registry; nothing is served over HTTP. The text
//! exposition is available through [`ScanMetrics::export`].

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounterVec, Opts, Registry, TextEncoder,
};

use crate::models::candles::Phase;

pub struct ScanMetrics {
    registry: Registry,
    pub tasks_total: IntCounterVec,
    pub fetch_failures_total: IntCounterVec,
    pub rejections_total: IntCounterVec,
    pub accepted_total: IntCounterVec,
    pub fetch_duration_seconds: Histogram,
}

impl ScanMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let tasks_total = IntCounterVec::new(
            Opts::new("scanner_tasks_total", "Symbol tasks dispatched per phase"),
            &["phase"],
        )?;
        let fetch_failures_total = IntCounterVec::new(
            Opts::new(
                "scanner_fetch_failures_total",
                "Candle fetches skipped, by phase and failure kind",
            ),
            &["phase", "kind"],
        )?;
        let rejections_total = IntCounterVec::new(
            Opts::new(
                "scanner_rejections_total",
                "Symbols rejected by the filter, by phase and gate",
            ),
            &["phase", "gate"],
        )?;
        let accepted_total = IntCounterVec::new(
            Opts::new("scanner_accepted_total", "Accepted records per phase"),
            &["phase"],
        )?;
        let fetch_duration_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "scanner_fetch_duration_seconds",
                "Candle fetch latency in seconds",
            )
            .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.0, 3.0, 5.0]),
        )?;

        registry.register(Box::new(tasks_total.clone()))?;
        registry.register(Box::new(fetch_failures_total.clone()))?;
        registry.register(Box::new(rejections_total.clone()))?;
        registry.register(Box::new(accepted_total.clone()))?;
        registry.register(Box::new(fetch_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            tasks_total,
            fetch_failures_total,
            rejections_total,
            accepted_total,
            fetch_duration_seconds,
        })
    }

    pub fn record_task(&self, phase: Phase) {
        self.tasks_total.with_label_values(&[phase.as_str()]).inc();
    }

    pub fn record_fetch_failure(&self, phase: Phase, kind: &str) {
        self.fetch_failures_total
            .with_label_values(&[phase.as_str(), kind])
            .inc();
    }

    pub fn record_rejection(&self, phase: Phase, gate: &str) {
        self.rejections_total
            .with_label_values(&[phase.as_str(), gate])
            .inc();
    }

    pub fn record_accepted(&self, phase: Phase) {
        self.accepted_total.with_label_values(&[phase.as_str()]).inc();
    }

    pub fn accepted(&self, phase: Phase) -> u64 {
        self.accepted_total.with_label_values(&[phase.as_str()]).get()
    }

    pub fn fetch_failures(&self, phase: Phase, kind: &str) -> u64 {
        self.fetch_failures_total
            .with_label_values(&[phase.as_str(), kind])
            .get()
    }

    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
