//! Candidate grouping lengths
//!
//! Two-word names (first + last) are the most common entity shape, three-word
//! names the next. Single words come after both so a generic word is not
//! matched when it begins a longer name. Anything longer is a fallback, tried
//! shortest first.

/// Grouping lengths to try, in order, for a stream of `remaining` tokens.
///
/// Empty when no tokens remain.
pub fn guess_order(remaining: usize) -> Vec<usize> {
    match remaining {
        0 => vec![],
        1 => vec![1],
        2 => vec![2, 1],
        n => [2, 3, 1].into_iter().chain(4..=n).collect(),
    }
}

/// Candidate text for the first `len` tokens, in the lookup's query format
pub fn candidate(tokens: &[String], len: usize) -> String {
    tokens[..len.min(tokens.len())].join("_")
}
