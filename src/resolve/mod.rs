//! Entity resolution engine
//!
//! Turns a token stream into an ordered set of entities:
//!
//! ```text
//! tokens ──► quotes::extract_quoted ──► quoted candidates ──► resolve_quoted ──┐
//!                    │                                                         ├──► Resolution
//!                    └──────────────► residual tokens ──► resolve_guessed ─────┘
//! ```
//!
//! Both phases issue lookups one at a time and in order: guess order decides
//! which grouping wins, so lookups are never fanned out.

pub mod driver;
pub mod guess;
pub mod quotes;

use std::sync::Arc;
use std::time::Duration;

use crate::config::ResolverConfig;
use crate::entity::ResolvedEntities;
use crate::lookup::EntityLookup;
use crate::query;

pub use driver::GuessOutcome;
pub use guess::guess_order;
pub use quotes::{extract_quoted, QuoteExtraction, QuoteMode};

/// Knobs for a resolver instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverOptions {
    pub quote_mode: QuoteMode,
    /// Bound on each individual lookup
    pub lookup_timeout: Duration,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        ResolverOptions::from(&ResolverConfig::default())
    }
}

impl From<&ResolverConfig> for ResolverOptions {
    fn from(config: &ResolverConfig) -> Self {
        Self {
            quote_mode: config.quote_mode,
            lookup_timeout: config.lookup_timeout(),
        }
    }
}

/// Result of resolving one query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Quoted entities first, then guessed entities left to right
    pub entities: ResolvedEntities,
    /// Tokens no grouping could consume
    pub unmatched: Vec<String>,
}

/// Resolves token streams against an [`EntityLookup`]
///
/// Holds no per-query state, so one instance can be shared across requests.
#[derive(Clone)]
pub struct EntityResolver {
    lookup: Arc<dyn EntityLookup>,
    options: ResolverOptions,
}

impl EntityResolver {
    pub fn new(lookup: Arc<dyn EntityLookup>, options: ResolverOptions) -> Self {
        Self { lookup, options }
    }

    /// Full pipeline: quoted spans, then guessed groupings of what is left
    pub async fn resolve_tokens(&self, tokens: &[String]) -> Resolution {
        let QuoteExtraction { quoted, residual } =
            extract_quoted(tokens, self.options.quote_mode);

        tracing::debug!(
            quoted = quoted.len(),
            residual = residual.len(),
            "Split query tokens"
        );

        let mut entities = self.resolve_quoted(&quoted).await;
        let guessed = self.resolve_guessed(residual).await;
        entities.extend(guessed.entities);

        Resolution {
            entities,
            unmatched: guessed.remaining,
        }
    }

    /// Tokenize a raw search query and resolve it.
    ///
    /// `None` when the query is not a side-by-side request.
    pub async fn resolve_query(&self, query: &str) -> Option<Resolution> {
        let tokens = query::query_tokens(query)?;
        Some(self.resolve_tokens(&tokens).await)
    }

    /// Quoted phase only
    pub async fn resolve_quoted(&self, quoted: &[String]) -> ResolvedEntities {
        driver::resolve_quoted(self.lookup.as_ref(), quoted, self.options.lookup_timeout).await
    }

    /// Guessing phase only
    pub async fn resolve_guessed(&self, tokens: Vec<String>) -> GuessOutcome {
        driver::resolve_guessed(self.lookup.as_ref(), tokens, self.options.lookup_timeout).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::StaticLookup;

    #[test]
    fn test_options_from_config() {
        let config = ResolverConfig {
            quote_mode: QuoteMode::Positional,
            lookup_timeout_ms: 750,
        };
        let options = ResolverOptions::from(&config);
        assert_eq!(options.quote_mode, QuoteMode::Positional);
        assert_eq!(options.lookup_timeout, Duration::from_millis(750));
    }

    #[tokio::test]
    async fn test_quoted_before_guessed() {
        let lookup = Arc::new(
            StaticLookup::new()
                .with_entry("michael jordan", "Michael Jordan", "mj.jpg")
                .with_entry("lebron_james", "LeBron James", "lj.jpg"),
        );
        let resolver = EntityResolver::new(lookup.clone(), ResolverOptions::default());

        let tokens: Vec<String> = ["lebron", "james", "\"michael", "jordan\""]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let resolution = resolver.resolve_tokens(&tokens).await;

        assert_eq!(
            resolution.entities.names().collect::<Vec<_>>(),
            vec!["Michael Jordan", "LeBron James"]
        );
        assert!(resolution.unmatched.is_empty());
        assert_eq!(lookup.calls(), vec!["michael jordan", "lebron_james"]);
    }

    #[tokio::test]
    async fn test_resolve_query_requires_trigger() {
        let lookup = Arc::new(StaticLookup::new().with_entry("drake", "Drake (musician)", "d.jpg"));
        let resolver = EntityResolver::new(lookup, ResolverOptions::default());

        assert!(resolver.resolve_query("drake").await.is_none());

        let resolution = resolver.resolve_query("Side by side drake").await.unwrap();
        assert_eq!(resolution.entities.len(), 1);
    }
}
