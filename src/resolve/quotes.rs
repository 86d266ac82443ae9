//! Quoted span extraction
//!
//! Tokens wrapped in double quotes name an entity explicitly:
//! `"michael jordan" plays` yields the candidate `michael jordan` and leaves
//! `plays` for guessing.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;

const QUOTE: char = '"';

/// How an opening quote is recognised
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteMode {
    /// The token's own first character is a quote
    #[default]
    Boundary,
    /// Legacy: the character at the token's stream index is a quote.
    ///
    /// Only agrees with `Boundary` for the first token of a stream; kept for
    /// compatibility with the extension's historical output.
    Positional,
}

impl FromStr for QuoteMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "boundary" => Ok(QuoteMode::Boundary),
            "positional" => Ok(QuoteMode::Positional),
            other => Err(ConfigError::InvalidValue {
                key: "quote_mode".to_string(),
                reason: format!("expected 'boundary' or 'positional', got '{}'", other),
            }),
        }
    }
}

/// Quoted candidates plus the tokens left for guessing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteExtraction {
    /// Space-joined, quote-stripped span text in document order
    pub quoted: Vec<String>,
    /// Tokens outside every closed span, original order
    pub residual: Vec<String>,
}

fn opens_quote(token: &str, index: usize, mode: QuoteMode) -> bool {
    match mode {
        QuoteMode::Boundary => token.starts_with(QUOTE),
        QuoteMode::Positional => token.chars().nth(index) == Some(QUOTE),
    }
}

fn closes_quote(token: &str) -> bool {
    token.ends_with(QUOTE)
}

/// Flat list of boundary indices: even positions open, odd positions close.
///
/// An odd-length result means the last span was never closed.
pub fn quote_boundaries(tokens: &[String], mode: QuoteMode) -> Vec<usize> {
    let mut in_quotes = false;
    let mut boundaries = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        if !in_quotes {
            if opens_quote(token, i, mode) {
                boundaries.push(i);
                in_quotes = true;

                // `"drake"` opens and closes on the same token
                if mode == QuoteMode::Boundary && token.chars().count() >= 2 && closes_quote(token)
                {
                    boundaries.push(i);
                    in_quotes = false;
                }
            }
        } else if closes_quote(token) {
            boundaries.push(i);
            in_quotes = false;
        }
    }

    boundaries
}

/// Split `tokens` into quoted candidates and the residual stream
pub fn extract_quoted(tokens: &[String], mode: QuoteMode) -> QuoteExtraction {
    let boundaries = quote_boundaries(tokens, mode);
    let spans: Vec<(usize, usize)> = boundaries
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect();

    let quoted = spans
        .iter()
        .filter_map(|&(start, end)| {
            let words: Vec<String> = tokens[start..=end]
                .iter()
                .map(|t| t.replace(QUOTE, ""))
                .filter(|t| !t.is_empty())
                .collect();
            (!words.is_empty()).then(|| words.join(" "))
        })
        .collect();

    let residual = tokens
        .iter()
        .enumerate()
        .filter(|(i, _)| !spans.iter().any(|&(start, end)| (start..=end).contains(i)))
        .map(|(_, t)| t.clone())
        .collect();

    QuoteExtraction { quoted, residual }
}
