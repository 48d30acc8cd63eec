//! Free-text summarizer.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::SummaryResult;
use crate::types::TextSummary;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email pattern is valid")
});

// Nine bare digits only; separators and country codes are not matched.
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{9}\b").expect("phone pattern is valid"));

/// Summarize a UTF-8 text file.
///
/// Invalid UTF-8 is reported as [`crate::SummaryError::Encoding`].
pub fn summarize_text_from_path(path: impl AsRef<Path>) -> SummaryResult<TextSummary> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes)?;
    Ok(summarize_text_from_str(&text))
}

/// Summarize in-memory text.
///
/// `rows` is the number of `\n` characters plus one, so an empty input reports one row and a
/// trailing newline adds an (empty) row. Content is counted raw: `\r\n` is two characters.
pub fn summarize_text_from_str(text: &str) -> TextSummary {
    TextSummary {
        rows: text.matches('\n').count() + 1,
        words: text.split_whitespace().count(),
        characters: text.chars().count(),
        emails: find_all(&EMAIL_REGEX, text),
        phone_numbers: find_all(&PHONE_REGEX, text),
    }
}

fn find_all(re: &Regex, text: &str) -> Vec<String> {
    re.find_iter(text).map(|m| m.as_str().to_string()).collect()
}
