//! Reporter trait and report types
//!
//! The reporter is a one-way sink: the runner pushes events into it and never
//! reads anything back.

use crate::classify::AttemptVerdict;
use crate::output::stats::PassSummary;
use crate::state::ClassificationOutcome;
use crate::RunnerError;
use std::time::Duration;

/// Everything known about one completed probe
#[derive(Debug, Clone)]
pub struct ProbeReport {
    /// The probed URL, exactly as it appeared in the list
    pub url: String,

    /// Final classification
    pub outcome: ClassificationOutcome,

    /// Verdict of the direct attempt
    pub direct: AttemptVerdict,

    /// Verdict of the relayed attempt, if one was made
    pub relay: Option<AttemptVerdict>,

    /// Wall time spent on both attempts
    pub elapsed: Duration,
}

impl ProbeReport {
    /// Number of network attempts this probe made
    pub fn attempts(&self) -> usize {
        if self.relay.is_some() {
            2
        } else {
            1
        }
    }

    /// Classification detail column of the report line
    pub fn detail(&self) -> String {
        match (&self.outcome, &self.relay) {
            (ClassificationOutcome::DirectOk, _) => self.direct.to_string(),
            (ClassificationOutcome::ProxyOk, Some(relay)) => {
                format!("{} (direct: {})", relay, self.direct)
            }
            (_, Some(relay)) => format!("direct: {}; relay: {}", self.direct, relay),
            (_, None) => format!("direct: {}", self.direct),
        }
    }

    /// Formats the report as `URL | outcome | detail`
    pub fn line(&self) -> String {
        format!("{} | {} | {}", self.url, self.outcome, self.detail())
    }
}

/// Sink for runner events
///
/// Implementations must be cheap and non-blocking; they are called from
/// worker tasks while other probes are in flight.
pub trait ProbeReporter: Send + Sync {
    /// Called exactly once per probed URL
    fn report_probe(&self, report: &ProbeReport);

    /// Called when a non-empty list was loaded, before the pass starts
    fn report_list_loaded(&self, _count: usize) {}

    /// Called when the list source yielded no URLs
    fn report_empty_list(&self, source: &str);

    /// Called when an iteration was abandoned because of an error
    fn report_iteration_error(&self, error: &RunnerError);

    /// Called once a pass has fully completed
    fn report_pass(&self, summary: &PassSummary);
}
