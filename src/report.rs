//! Console rendering of a ranked report.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::ranking::{RankedReport, TimeframeSection};

const RULE: &str = "----------------------------------------------------------------------";

/// Two fixed-width tables, one per timeframe, short first.
pub fn render_table(report: &RankedReport) -> String {
    let mut out = String::new();
    for section in &report.sections {
        render_section(&mut out, section);
    }
    out
}

fn render_section(out: &mut String, section: &TimeframeSection) {
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "        [{}] matching symbols ({})",
        section.timeframe,
        section.records.len()
    );
    let _ = writeln!(
        out,
        "{:<14} {:<16} {:<24} {:>10}",
        "Symbol", "Volume", "Trend", "Stop-loss%"
    );
    let _ = writeln!(out, "{}", RULE);
    for record in &section.records {
        let _ = writeln!(
            out,
            "{:<14} {:<16.0} {:<24} {:>10.2}",
            record.symbol, record.volume_24h, record.trend, record.stop_loss_pct
        );
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    report: &'a RankedReport,
}

pub fn render_json(report: &RankedReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        generated_at: Utc::now(),
        report,
    })
}
