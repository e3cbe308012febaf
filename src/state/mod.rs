//! State module for probe classification
//!
//! Nothing here outlives a single report: outcomes are produced, reported and
//! dropped.

mod outcome;

// Re-export main types
pub use outcome::ClassificationOutcome;
