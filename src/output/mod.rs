//! Output module for probe reporting
//!
//! This module provides:
//! - The `ProbeReporter` sink trait and the `ProbeReport` it receives
//! - A `tracing`-backed reporter used by the binary
//! - Per-pass outcome counters and latency statistics

mod log;
mod stats;
mod traits;

pub use log::LogReporter;
pub use stats::{print_summary, OutcomeCounts, PassSummary};
pub use traits::{ProbeReport, ProbeReporter};
