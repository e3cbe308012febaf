use serde::de::IgnoredAny;

/// Returns true if the body parses under strict JSON grammar
///
/// Any JSON value counts, including bare scalars such as `null`, `false`
/// or `42`. An empty body is never JSON.
///
/// # Examples
///
/// ```
/// use url_runner::classify::looks_like_json;
///
/// assert!(looks_like_json(r#"{"a":1}"#));
/// assert!(looks_like_json("null"));
/// assert!(!looks_like_json("not json"));
/// assert!(!looks_like_json(""));
/// ```
pub fn looks_like_json(body: &str) -> bool {
    if body.is_empty() {
        return false;
    }

    serde_json::from_str::<IgnoredAny>(body).is_ok()
}
