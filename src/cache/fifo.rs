//! FIFO Cache Module
//!
//! Evicts entries in the order they were first inserted.

use std::borrow::Borrow;
use std::collections::vec_deque;
use std::collections::VecDeque;
use std::fmt::Display;
use std::hash::Hash;

use tracing::debug;

use crate::cache::{Blank, BoundedStore, Cache, EvictionNotifier, PutOutcome, DEFAULT_CAPACITY};
use crate::config::Policy;
use crate::error::Result;

// == FIFO Cache ==
/// Bounded cache with first-in-first-out eviction.
///
/// The queue holds every resident key exactly once:
/// - Front = oldest insertion, next to be evicted
/// - Back = newest insertion
///
/// Overwriting a resident key replaces its value but keeps its place in the
/// queue, and `get` never reorders.
#[derive(Debug)]
pub struct FifoCache<K, V> {
    /// Key-value storage
    store: BoundedStore<K, V>,
    /// Keys in insertion order
    queue: VecDeque<K>,
    /// Eviction signal
    notifier: EvictionNotifier<K, V>,
}

impl<K, V> FifoCache<K, V>
where
    K: Eq + Hash,
{
    // == Constructor ==
    /// Creates an empty cache holding up to [`MAX_ITEMS`](crate::cache::MAX_ITEMS) entries.
    pub fn new() -> Self {
        Self::from_store(BoundedStore::new(DEFAULT_CAPACITY))
    }

    /// Creates an empty cache holding up to `capacity` entries.
    ///
    /// Returns `CacheError::ZeroCapacity` if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        BoundedStore::try_new(capacity).map(Self::from_store)
    }

    fn from_store(store: BoundedStore<K, V>) -> Self {
        Self {
            queue: VecDeque::with_capacity(store.capacity()),
            store,
            notifier: EvictionNotifier::new(),
        }
    }

    // == Listener ==
    /// Builder form of [`set_listener`](Self::set_listener).
    pub fn with_listener<F>(mut self, listener: F) -> Self
    where
        F: FnMut(&K, &V) + Send + 'static,
    {
        self.set_listener(listener);
        self
    }

    /// Registers a callback run for every evicted entry.
    pub fn set_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&K, &V) + Send + 'static,
    {
        self.notifier.set_listener(listener);
    }

    // == Get ==
    /// Returns the value stored under `key`. Does not affect eviction order.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.store.get(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.store.contains_key(key)
    }

    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Resident keys, next eviction victim first.
    pub fn eviction_order(&self) -> vec_deque::Iter<'_, K> {
        self.queue.iter()
    }
}

impl<K, V> FifoCache<K, V>
where
    K: Eq + Hash + Clone + Display + Blank,
    V: Blank,
{
    // == Put ==
    /// Stores a key-value pair.
    ///
    /// Blank keys or values are ignored. If the cache is full and `key` is
    /// new, the oldest inserted entry is evicted first. Overwrites never
    /// evict.
    pub fn put(&mut self, key: K, value: V) -> PutOutcome<K, V> {
        if key.is_blank() || value.is_blank() {
            debug!("Ignoring put with blank key or value");
            return PutOutcome::Rejected;
        }

        if self.store.contains_key(&key) {
            debug!(%key, "Overwriting resident key");
            self.store.insert(key, value);
            return PutOutcome::Stored;
        }

        let outcome = if self.store.is_full() {
            self.evict_oldest()
        } else {
            PutOutcome::Stored
        };

        debug!(%key, "Storing new key");
        self.store.insert(key.clone(), value);
        self.queue.push_back(key);

        outcome
    }

    // == Evict Oldest ==
    fn evict_oldest(&mut self) -> PutOutcome<K, V> {
        let evicted = self
            .queue
            .pop_front()
            .and_then(|key| self.store.remove(&key).map(|value| (key, value)));

        match evicted {
            Some((key, value)) => {
                self.notifier.notify(&key, &value);
                PutOutcome::Evicted { key, value }
            }
            None => PutOutcome::Stored,
        }
    }
}

impl<K, V> Default for FifoCache<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Cache<K, V> for FifoCache<K, V>
where
    K: Eq + Hash + Clone + Display + Blank,
    V: Blank,
{
    fn put(&mut self, key: K, value: V) -> PutOutcome<K, V> {
        FifoCache::put(self, key, value)
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        FifoCache::get(self, key)
    }

    fn policy(&self) -> Policy {
        Policy::Fifo
    }

    fn capacity(&self) -> usize {
        self.store.capacity()
    }

    fn len(&self) -> usize {
        self.store.len()
    }

    fn entries(&self) -> Vec<(&K, &V)> {
        self.store.entries()
    }
}
