//! Reporter backed by `tracing`
//!
//! Every event carries structured fields in addition to the human-readable
//! message, so a JSON subscriber can pick them up without parsing lines.

use crate::output::stats::PassSummary;
use crate::output::traits::{ProbeReport, ProbeReporter};
use crate::state::ClassificationOutcome;
use crate::RunnerError;

/// Writes runner events to the global `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl LogReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ProbeReporter for LogReporter {
    fn report_probe(&self, report: &ProbeReport) {
        let elapsed_ms = report.elapsed.as_millis() as u64;
        match report.outcome {
            ClassificationOutcome::Failed => tracing::warn!(
                url = %report.url,
                outcome = report.outcome.as_str(),
                attempts = report.attempts(),
                elapsed_ms,
                "{}",
                report.line()
            ),
            _ => tracing::info!(
                url = %report.url,
                outcome = report.outcome.as_str(),
                attempts = report.attempts(),
                elapsed_ms,
                "{}",
                report.line()
            ),
        }
    }

    fn report_list_loaded(&self, count: usize) {
        tracing::info!(urls = count, "Loaded {} URLs", count);
    }

    fn report_empty_list(&self, source: &str) {
        tracing::warn!(source, "URL list is empty, fetching again");
    }

    fn report_iteration_error(&self, error: &RunnerError) {
        tracing::error!("Iteration failed: {}", error);
    }

    fn report_pass(&self, summary: &PassSummary) {
        tracing::info!(
            urls = summary.url_count,
            direct_ok = summary.counts.direct_ok,
            proxy_ok = summary.counts.proxy_ok,
            failed = summary.counts.failed,
            mean_probe_ms = summary.counts.mean_probe_time().as_millis() as u64,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "Pass complete: {} direct, {} proxy, {} failed in {:.1}s",
            summary.counts.direct_ok,
            summary.counts.proxy_ok,
            summary.counts.failed,
            summary.elapsed.as_secs_f64()
        );
    }
}
