//! Resolved entity types
//!
//! [`ResolvedEntities`] is the ordered mapping handed back to callers:
//! canonical name -> card, in discovery order. It serialises as a JSON object
//! (`{"LeBron James": {"imageURL": "..."}}`) with keys in that order.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// A validated lookup result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMatch {
    /// Name as returned by the lookup service (may differ from the candidate text)
    pub canonical_name: String,
    pub image_url: String,
}

impl EntityMatch {
    pub fn new(canonical_name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            image_url: image_url.into(),
        }
    }
}

/// Per-entity record in the output mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCard {
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

/// Ordered canonical name -> card mapping
///
/// Inserting a name that is already present replaces its card in place, so
/// a name keeps the position of its first discovery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedEntities {
    entries: Vec<(String, EntityCard)>,
}

impl ResolvedEntities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entity: EntityMatch) {
        let card = EntityCard {
            image_url: entity.image_url,
        };
        match self
            .entries
            .iter_mut()
            .find(|(name, _)| *name == entity.canonical_name)
        {
            Some((_, existing)) => *existing = card,
            None => self.entries.push((entity.canonical_name, card)),
        }
    }

    /// Merge `other` after the current entries
    pub fn extend(&mut self, other: ResolvedEntities) {
        for (name, card) in other.entries {
            self.insert(EntityMatch::new(name, card.image_url));
        }
    }

    pub fn get(&self, name: &str) -> Option<&EntityCard> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, card)| card)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EntityCard)> {
        self.entries.iter().map(|(name, card)| (name.as_str(), card))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ResolvedEntities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, card) in &self.entries {
            map.serialize_entry(name, card)?;
        }
        map.end()
    }
}
