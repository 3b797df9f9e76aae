//! Snapshot model
//!
//! Serializable view of a cache, used for JSON output.

use std::fmt::Display;

use serde::Serialize;

use crate::cache::Cache;
use crate::config::Policy;

/// One resident entry, rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotEntry {
    pub key: String,
    pub value: String,
}

impl SnapshotEntry {
    /// Creates a new SnapshotEntry
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Point-in-time contents of a cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheSnapshot {
    /// Eviction policy of the cache
    pub policy: Policy,
    /// Maximum number of entries
    pub capacity: usize,
    /// Resident entries sorted by key
    pub entries: Vec<SnapshotEntry>,
}

impl CacheSnapshot {
    /// Captures the current contents of `cache`.
    pub fn capture<K, V, C>(cache: &C) -> Self
    where
        C: Cache<K, V> + ?Sized,
        K: Ord + Display,
        V: Display,
    {
        let mut entries = cache.entries();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        Self {
            policy: cache.policy(),
            capacity: cache.capacity(),
            entries: entries
                .into_iter()
                .map(|(key, value)| SnapshotEntry::new(key.to_string(), value.to_string()))
                .collect(),
        }
    }
}
