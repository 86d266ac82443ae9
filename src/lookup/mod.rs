//! Entity lookup capability
//!
//! The resolver validates every candidate through an [`EntityLookup`]. A
//! lookup either produces a canonical name with an image or reports no
//! match; adapters swallow their own transport failures so one bad request
//! only moves the resolver on to its next guess.

pub mod static_lookup;
pub mod wikipedia;

use async_trait::async_trait;

use crate::entity::EntityMatch;

pub use static_lookup::StaticLookup;
pub use wikipedia::WikipediaClient;

/// Candidate text -> canonical entity
///
/// Implementations must be Send + Sync so one instance can serve many
/// concurrent queries.
#[async_trait]
pub trait EntityLookup: Send + Sync {
    /// Resolve free text (space- or underscore-joined) to an entity with an image.
    ///
    /// Returns `None` for no match and for any failure along the way.
    async fn resolve(&self, candidate: &str) -> Option<EntityMatch>;
}
