//! Fixed-table lookup
//!
//! Answers from an in-memory table keyed by exact candidate text, so the
//! resolver can be exercised without the network.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::EntityLookup;
use crate::entity::EntityMatch;

/// In-memory [`EntityLookup`] that also records every candidate it was asked for
#[derive(Debug, Default)]
pub struct StaticLookup {
    entries: HashMap<String, EntityMatch>,
    calls: Mutex<Vec<String>>,
}

impl StaticLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `candidate` to `canonical_name` with `image_url`
    pub fn with_entry(
        mut self,
        candidate: impl Into<String>,
        canonical_name: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        self.entries.insert(
            candidate.into(),
            EntityMatch::new(canonical_name, image_url),
        );
        self
    }

    /// Candidates seen so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn clear_calls(&self) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.clear();
        }
    }
}

#[async_trait]
impl EntityLookup for StaticLookup {
    async fn resolve(&self, candidate: &str) -> Option<EntityMatch> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(candidate.to_string());
        }
        self.entries.get(candidate).cloned()
    }
}
