/// Lowercase markers of anti-bot, captcha and edge-proxy block pages
pub const CHALLENGE_MARKERS: &[&str] = &[
    "captcha",
    "verify you are human",
    "verification",
    "robot",
    "cloudflare",
];

/// Returns true if the body looks like an anti-bot or verification page
///
/// This is a case-insensitive substring heuristic; a single marker is enough.
/// It can produce false positives (a JSON document mentioning "robot") and
/// false negatives (challenge pages using other wording).
///
/// # Examples
///
/// ```
/// use url_runner::classify::looks_like_challenge;
///
/// assert!(looks_like_challenge("Please complete VERIFICATION"));
/// assert!(!looks_like_challenge("hello world"));
/// ```
pub fn looks_like_challenge(body: &str) -> bool {
    if body.is_empty() {
        return false;
    }

    let lowered = body.to_lowercase();
    CHALLENGE_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}
