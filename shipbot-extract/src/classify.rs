//! Destination-path classification.
//!
//! An ordered table of (pattern, path template) pairs is evaluated against
//! the lowercased block content; the first match wins. The ordering is a
//! deliberate tie-break: Python indicators are checked before JavaScript
//! ones, so Python code containing the word "function" as an identifier
//! still lands in `src/`.

use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;

/// Rule table in priority order. The CSS pattern deliberately does not use
/// DOTALL: a declaration block must open and close on one line to match.
static RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"import\s|def\s|class\s", "src/module_{}.py"),
        (r"<!doctype\s?html|<html", "static/page_{}.html"),
        (r"function\s|console\.log|=>", "static/script_{}.js"),
        (r"\{\s*[\w-]+:.*?\}", "static/style_{}.css"),
    ]
    .into_iter()
    .map(|(pattern, template)| (Regex::new(pattern).expect("rule regex"), template))
    .collect()
});

const FALLBACK: &str = "misc/file_{}.txt";

/// Map block content plus its 1-based index to a destination path.
///
/// Total and deterministic: every content string maps to exactly one path
/// template, and the index is only used for the numeric suffix, never for
/// branching.
pub fn classify(content: &str, index: usize) -> PathBuf {
    let lowered = content.to_lowercase();
    let template = RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(&lowered))
        .map(|(_, template)| *template)
        .unwrap_or(FALLBACK);
    PathBuf::from(template.replace("{}", &index.to_string()))
}
