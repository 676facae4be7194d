//! Per-resolver memo of resolution outcomes.

use std::collections::HashMap;

use parking_lot::Mutex;

use super::remote::CandidateLocation;

/// Why an identifier could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissReason {
    /// Every candidate location failed at the transport level.
    NotFound,
    /// A module was fetched but no extraction heuristic matched it.
    Unextractable {
        /// Location whose content was unusable.
        location: CandidateLocation,
    },
}

impl std::fmt::Display for MissReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissReason::NotFound => write!(f, "not found"),
            MissReason::Unextractable { location } => {
                write!(f, "no extractable path data in {location}")
            }
        }
    }
}

/// Cached resolution result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheEntry {
    /// Resolved markup.
    Found(String),
    /// Recorded miss.
    Missing(MissReason),
}

impl CacheEntry {
    /// The markup, if this entry is a hit.
    pub fn markup(&self) -> Option<&str> {
        match self {
            CacheEntry::Found(markup) => Some(markup),
            CacheEntry::Missing(_) => None,
        }
    }

    /// Check if this entry records a miss.
    pub fn is_missing(&self) -> bool {
        matches!(self, CacheEntry::Missing(_))
    }
}

/// Identifier → outcome map owned by one resolver.
///
/// Entries are never evicted; the cache lives and dies with its resolver.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl ResolutionCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the entry for an identifier.
    pub fn get(&self, identifier: &str) -> Option<CacheEntry> {
        self.entries.lock().get(identifier).cloned()
    }

    /// Record an outcome and return the entry now stored.
    ///
    /// An existing entry is never replaced; it is returned instead of `entry`.
    pub fn insert(&self, identifier: &str, entry: CacheEntry) -> CacheEntry {
        self.entries
            .lock()
            .entry(identifier.to_string())
            .or_insert(entry)
            .clone()
    }

    /// Check if an identifier has an entry.
    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.lock().contains_key(identifier)
    }

    /// Number of cached identifiers.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
