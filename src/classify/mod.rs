//! Response body classification
//!
//! This module provides the pure predicates that decide whether a probe
//! attempt succeeded:
//! - `looks_like_json`: the body parses as strict JSON
//! - `looks_like_challenge`: the body carries anti-bot/verification markers
//!
//! An attempt is successful only when the body is JSON and not a challenge page.

mod challenge;
mod json;

use std::fmt;

// Re-export main functions
pub use challenge::{looks_like_challenge, CHALLENGE_MARKERS};
pub use json::looks_like_json;

/// Classification of a single fetch attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptVerdict {
    /// Body parsed as JSON and carried no challenge markers
    Json,
    /// Body looked like an anti-bot or verification page
    Challenge,
    /// Body was reachable but not JSON
    NotJson,
    /// The request never produced a body (DNS, connect, timeout, ...)
    Transport(String),
}

impl AttemptVerdict {
    /// Returns true if this attempt counts as reachable-and-serving-JSON
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Json)
    }
}

impl fmt::Display for AttemptVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Challenge => write!(f, "challenge page"),
            Self::NotJson => write!(f, "not JSON"),
            Self::Transport(error) => write!(f, "transport error: {}", error),
        }
    }
}

/// Classifies a response body
///
/// The challenge check runs first: a challenge page that happens to be valid
/// JSON is still blocked.
///
/// # Examples
///
/// ```
/// use url_runner::classify::{classify_body, AttemptVerdict};
///
/// assert_eq!(classify_body(r#"{"ok":true}"#), AttemptVerdict::Json);
/// assert_eq!(classify_body("<h1>Just a moment... Cloudflare</h1>"), AttemptVerdict::Challenge);
/// assert_eq!(classify_body("<html></html>"), AttemptVerdict::NotJson);
/// ```
pub fn classify_body(body: &str) -> AttemptVerdict {
    if looks_like_challenge(body) {
        AttemptVerdict::Challenge
    } else if looks_like_json(body) {
        AttemptVerdict::Json
    } else {
        AttemptVerdict::NotJson
    }
}
