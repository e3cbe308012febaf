//! Per-pass statistics
//!
//! Workers keep a private `OutcomeCounts` and hand it back when they exit;
//! the pool merges them into a `PassSummary`.

use crate::state::ClassificationOutcome;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Outcome counters and probe latency for a set of probes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub direct_ok: u64,
    pub proxy_ok: u64,
    pub failed: u64,

    /// Sum of all probe durations
    pub probe_time: Duration,

    /// Longest single probe
    pub slowest_probe: Duration,
}

impl OutcomeCounts {
    /// Records one completed probe
    pub fn record(&mut self, outcome: ClassificationOutcome, elapsed: Duration) {
        match outcome {
            ClassificationOutcome::DirectOk => self.direct_ok += 1,
            ClassificationOutcome::ProxyOk => self.proxy_ok += 1,
            ClassificationOutcome::Failed => self.failed += 1,
        }
        self.probe_time += elapsed;
        self.slowest_probe = self.slowest_probe.max(elapsed);
    }

    /// Folds another set of counters into this one
    pub fn merge(&mut self, other: &OutcomeCounts) {
        self.direct_ok += other.direct_ok;
        self.proxy_ok += other.proxy_ok;
        self.failed += other.failed;
        self.probe_time += other.probe_time;
        self.slowest_probe = self.slowest_probe.max(other.slowest_probe);
    }

    /// Number of probes recorded
    pub fn total(&self) -> u64 {
        self.direct_ok + self.proxy_ok + self.failed
    }

    /// Count for a single outcome
    pub fn count(&self, outcome: ClassificationOutcome) -> u64 {
        match outcome {
            ClassificationOutcome::DirectOk => self.direct_ok,
            ClassificationOutcome::ProxyOk => self.proxy_ok,
            ClassificationOutcome::Failed => self.failed,
        }
    }

    /// Average probe duration, zero when nothing was recorded
    pub fn mean_probe_time(&self) -> Duration {
        match u32::try_from(self.total()) {
            Ok(0) | Err(_) => Duration::ZERO,
            Ok(n) => self.probe_time / n,
        }
    }

    /// Percentage of probes that succeeded by either route
    pub fn success_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            ((self.direct_ok + self.proxy_ok) as f64 / total as f64) * 100.0
        }
    }
}

/// Summary of one completed pool pass
#[derive(Debug, Clone)]
pub struct PassSummary {
    /// When the pass started
    pub started_at: DateTime<Utc>,

    /// Number of URLs in the list
    pub url_count: usize,

    /// Number of workers started
    pub workers: usize,

    /// Workers that exited without claiming a URL
    pub idle_workers: usize,

    /// Workers that panicked mid-pass
    pub failed_workers: usize,

    /// Merged outcome counters
    pub counts: OutcomeCounts,

    /// Wall time of the whole pass
    pub elapsed: Duration,
}

impl PassSummary {
    /// Number of probes that finished
    pub fn probed(&self) -> u64 {
        self.counts.total()
    }
}

/// Prints a pass summary to stdout
pub fn print_summary(summary: &PassSummary) {
    println!("=== Pass Summary ===\n");

    println!("Started: {}", summary.started_at.to_rfc3339());
    println!("URLs: {}", summary.url_count);
    println!(
        "Workers: {} ({} idle, {} failed)",
        summary.workers, summary.idle_workers, summary.failed_workers
    );
    println!();

    println!("Outcomes:");
    for outcome in ClassificationOutcome::all() {
        println!("  {}: {}", outcome, summary.counts.count(outcome));
    }
    println!();

    println!(
        "Latency: mean {:?}, slowest {:?}",
        summary.counts.mean_probe_time(),
        summary.counts.slowest_probe
    );
    println!("Pass duration: {:?}", summary.elapsed);
    println!(
        "Success Rate: {:.1}% ({} / {} URLs reachable)",
        summary.counts.success_rate(),
        summary.counts.direct_ok + summary.counts.proxy_ok,
        summary.probed()
    );
}
