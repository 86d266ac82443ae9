//! Side By Side - entity cards for comparison searches
//!
//! Resolves a search query such as `side by side "Michael Jordan" lebron james`
//! into the entities it names, each with a representative image, by checking
//! candidate names against an external lookup service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Callers: browser extension, HTTP adapter (server feature)      │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │ tokens
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     EntityResolver                              │
//! │     quoted spans ──► guess order ──► greedy driver              │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │ candidate text
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  EntityLookup (trait)                           │
//! │        WikipediaClient: opensearch -> pageimages                │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use sidebyside::{EntityResolver, ResolverOptions, SideBySideConfig, WikipediaClient};
//!
//! let config = SideBySideConfig::load()?;
//! let lookup = Arc::new(WikipediaClient::new(&config.lookup)?);
//! let resolver = EntityResolver::new(lookup, ResolverOptions::from(&config.resolver));
//!
//! if let Some(resolution) = resolver.resolve_query("side by side drake kendrick lamar").await {
//!     for (name, card) in resolution.entities.iter() {
//!         println!("{name}: {}", card.image_url);
//!     }
//! }
//! ```

pub mod config;
pub mod entity;
pub mod error;
pub mod lookup;
pub mod query;
pub mod resolve;
#[cfg(feature = "server")]
pub mod server;

// Re-export main types
pub use config::{LookupConfig, ResolverConfig, ServerConfig, SideBySideConfig};
pub use entity::{EntityCard, EntityMatch, ResolvedEntities};
pub use error::{ConfigError, LookupError};
pub use lookup::{EntityLookup, StaticLookup, WikipediaClient};
pub use resolve::{
    extract_quoted, guess_order, EntityResolver, GuessOutcome, QuoteExtraction, QuoteMode,
    Resolution, ResolverOptions,
};
