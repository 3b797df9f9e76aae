//! Bounded Store Module
//!
//! HashMap storage with a fixed maximum entry count, shared by every cache
//! policy through composition.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::num::NonZeroUsize;

use crate::error::{CacheError, Result};

// == Bounded Store ==
/// Key-value storage that knows its capacity.
///
/// The store never evicts on its own; policies check [`is_full`] and decide
/// which key goes before inserting a new one.
///
/// [`is_full`]: BoundedStore::is_full
#[derive(Debug, Clone)]
pub struct BoundedStore<K, V> {
    /// Key-value storage
    entries: HashMap<K, V>,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<K, V> BoundedStore<K, V>
where
    K: Eq + Hash,
{
    // == Constructor ==
    /// Creates an empty store holding at most `capacity` entries.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity.get()),
            capacity: capacity.get(),
        }
    }

    /// Like [`new`](Self::new), but checks a plain `usize`.
    ///
    /// Returns `CacheError::ZeroCapacity` if `capacity` is zero.
    pub fn try_new(capacity: usize) -> Result<Self> {
        NonZeroUsize::new(capacity)
            .map(Self::new)
            .ok_or(CacheError::ZeroCapacity)
    }

    // == Capacity ==
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Is Full ==
    /// Returns true once the store holds `capacity` entries.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    // == Contains ==
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.contains_key(key)
    }

    // == Get ==
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.get(key)
    }

    // == Insert ==
    /// Inserts or overwrites an entry, returning the previous value.
    ///
    /// Capacity is not checked here.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    // == Remove ==
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.remove(key)
    }

    // == Entries ==
    /// Returns all entries in arbitrary order.
    pub fn entries(&self) -> Vec<(&K, &V)> {
        self.entries.iter().collect()
    }
}
