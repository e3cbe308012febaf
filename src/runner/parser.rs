//! URL list parsing

/// Parses raw list text into an ordered sequence of URLs
///
/// Lines may end in `\n` or `\r\n`. Each line is trimmed and blank lines are
/// dropped; order is preserved. Entries are not validated, so a malformed
/// line is passed through and fails later at fetch time.
///
/// # Examples
///
/// ```
/// use url_runner::runner::parse_list;
///
/// assert_eq!(parse_list("a\nb\r\n\nc "), vec!["a", "b", "c"]);
/// assert!(parse_list("").is_empty());
/// ```
pub fn parse_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
