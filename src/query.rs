//! Side-by-side query detection and tokenization
//!
//! A search query is a side-by-side request when it contains the phrase
//! "side by side" (any case). The phrase itself is removed and the rest is
//! split on whitespace into the token stream the resolver consumes.

use regex::Regex;
use std::sync::LazyLock;

/// Trigger phrase, case-insensitive
static TRIGGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)side by side").expect("trigger pattern is valid"));

/// Whether `query` asks for a side-by-side comparison
pub fn is_side_by_side(query: &str) -> bool {
    TRIGGER_RE.is_match(query)
}

/// Token stream for a side-by-side query, or `None` when the trigger is absent.
///
/// Only the first occurrence of the phrase is removed; later ones stay as tokens.
pub fn query_tokens(query: &str) -> Option<Vec<String>> {
    if !is_side_by_side(query) {
        return None;
    }
    let stripped = TRIGGER_RE.replace(query, " ");
    Some(split_tokens(&stripped))
}

/// Split on whitespace, dropping empty tokens
pub fn split_tokens(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}
