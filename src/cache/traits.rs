//! Cache Trait Module
//!
//! Common interface over the eviction policies, plus the debug printer that
//! works against any of them.

use std::fmt::{Display, Write};

use crate::cache::PutOutcome;
use crate::config::Policy;

// == Cache Trait ==
/// Operations shared by every bounded cache.
///
/// `get` takes `&mut self` because some policies (LRU) record the access.
pub trait Cache<K, V> {
    /// Stores `value` under `key`, evicting one entry if the cache is full
    /// and `key` is new. Blank keys or values are ignored.
    fn put(&mut self, key: K, value: V) -> PutOutcome<K, V>;

    /// Looks up `key`, returning `None` if it is not resident.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Eviction policy implemented by this cache.
    fn policy(&self) -> Policy;

    fn capacity(&self) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resident entries in arbitrary order.
    fn entries(&self) -> Vec<(&K, &V)>;
}

// == Print Cache ==
/// Renders the cache contents as text, one `key: value` line per entry in
/// ascending key order, under a `Current cache:` header.
pub fn print_cache<K, V, C>(cache: &C) -> String
where
    C: Cache<K, V> + ?Sized,
    K: Ord + Display,
    V: Display,
{
    let mut entries = cache.entries();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut out = String::from("Current cache:\n");
    for (key, value) in entries {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{}: {}", key, value);
    }
    out
}
