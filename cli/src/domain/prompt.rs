//! Interpretation of operator answers: no I/O.

/// Resolve a free-text answer: surrounding whitespace is trimmed and an empty
/// answer accepts `default` (or the empty string when there is none).
#[must_use]
pub fn resolve_answer(raw: &str, default: Option<&str>) -> String {
    let answer = raw.trim();
    if answer.is_empty() {
        default.unwrap_or_default().to_string()
    } else {
        answer.to_string()
    }
}

/// Interpret a yes/no answer by its first character, ignoring case.
///
/// Returns `None` for anything that should be asked again.
#[must_use]
pub fn parse_yes_no(raw: &str) -> Option<bool> {
    match raw.trim_start().chars().next()?.to_ascii_lowercase() {
        'y' => Some(true),
        'n' => Some(false),
        _ => None,
    }
}
