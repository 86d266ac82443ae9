//! Resolution driver
//!
//! Walks the token stream front to back. Each round tries the grouping
//! lengths from [`guess_order`] until one validates, then drops that prefix
//! and starts a new round on the shorter stream. A round where nothing
//! validates ends resolution; the remaining tokens are returned unmatched.

use std::time::{Duration, Instant};

use tokio::time::timeout;

use super::guess::{candidate, guess_order};
use crate::entity::{EntityMatch, ResolvedEntities};
use crate::error::LookupError;
use crate::lookup::EntityLookup;

/// Entities found by guessing plus the tokens no guess could consume
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessOutcome {
    pub entities: ResolvedEntities,
    pub remaining: Vec<String>,
}

/// One lookup, bounded by `limit`. Timeouts count as no match.
pub(crate) async fn lookup_bounded(
    lookup: &dyn EntityLookup,
    text: &str,
    limit: Duration,
) -> Option<EntityMatch> {
    let started = Instant::now();
    match timeout(limit, lookup.resolve(text)).await {
        Ok(found) => found,
        Err(_) => {
            let err = LookupError::Timeout {
                candidate: text.to_string(),
                elapsed: started.elapsed(),
            };
            tracing::warn!(error = %err, "Lookup abandoned");
            None
        }
    }
}

/// Resolve each quoted candidate as a whole, in order
pub async fn resolve_quoted(
    lookup: &dyn EntityLookup,
    quoted: &[String],
    limit: Duration,
) -> ResolvedEntities {
    let mut entities = ResolvedEntities::new();

    for text in quoted {
        tracing::debug!(candidate = %text, "Trying quoted entity");
        match lookup_bounded(lookup, text, limit).await {
            Some(found) => {
                tracing::info!(candidate = %text, entity = %found.canonical_name, "Resolved quoted entity");
                entities.insert(found);
            }
            None => tracing::debug!(candidate = %text, "Quoted entity not found"),
        }
    }

    entities
}

/// Try each grouping length for the current stream; first match wins.
///
/// Returns the match and how many tokens it consumed.
async fn resolve_round(
    lookup: &dyn EntityLookup,
    tokens: &[String],
    limit: Duration,
) -> Option<(EntityMatch, usize)> {
    for len in guess_order(tokens.len()) {
        let text = candidate(tokens, len);
        tracing::debug!(candidate = %text, len, "Trying grouping");
        if let Some(found) = lookup_bounded(lookup, &text, limit).await {
            return Some((found, len));
        }
    }
    None
}

/// Greedily group `tokens` into entities
pub async fn resolve_guessed(
    lookup: &dyn EntityLookup,
    tokens: Vec<String>,
    limit: Duration,
) -> GuessOutcome {
    let mut entities = ResolvedEntities::new();
    let mut remaining = tokens;

    while !remaining.is_empty() {
        let Some((found, consumed)) = resolve_round(lookup, &remaining, limit).await else {
            tracing::debug!(unmatched = ?remaining, "No grouping matched, stopping");
            break;
        };

        tracing::info!(
            entity = %found.canonical_name,
            tokens = consumed,
            "Resolved guessed entity"
        );
        entities.insert(found);
        remaining = remaining.split_off(consumed);
    }

    GuessOutcome {
        entities,
        remaining,
    }
}
