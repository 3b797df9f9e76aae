//! LRU Cache Module
//!
//! Implements Least Recently Used tracking and the cache built on it.

use std::borrow::Borrow;
use std::collections::vec_deque;
use std::collections::VecDeque;
use std::fmt::Display;
use std::hash::Hash;

use tracing::debug;

use crate::cache::{Blank, BoundedStore, Cache, EvictionNotifier, PutOutcome, DEFAULT_CAPACITY};
use crate::config::Policy;
use crate::error::Result;

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Keys are stored in a VecDeque where:
/// - Front = Least recently used
/// - Back = Most recently used
#[derive(Debug, Clone)]
pub struct LruTracker<K> {
    /// Order of keys by access time
    order: VecDeque<K>,
}

impl<K> LruTracker<K> {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    /// Creates an empty tracker with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: VecDeque::with_capacity(capacity),
        }
    }

    // == Touch ==
    /// Marks a key as recently used (moves to back).
    ///
    /// If key exists, removes it first then adds to back.
    /// If key is new, just adds to back.
    pub fn touch(&mut self, key: K)
    where
        K: Eq,
    {
        self.remove(&key);
        self.order.push_back(key);
    }

    // == Promote ==
    /// Moves an already tracked key to the back.
    ///
    /// Returns false, leaving the order alone, if the key is not tracked.
    pub fn promote<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        match self.remove(key) {
            Some(existing) => {
                self.order.push_back(existing);
                true
            }
            None => false,
        }
    }

    // == Remove ==
    /// Removes a key from the tracker, returning it if it was tracked.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let position = self.position(key)?;
        self.order.remove(position)
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<K> {
        self.order.pop_front()
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Tracked keys from least to most recently used.
    pub fn iter(&self) -> vec_deque::Iter<'_, K> {
        self.order.iter()
    }

    fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.order.iter().position(|k| k.borrow() == key)
    }
}

impl<K> Default for LruTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

// == LRU Cache ==
/// Bounded cache with least-recently-used eviction.
///
/// Both `put` and `get` mark a key as most recently used. The tracker and
/// the store always hold the same key set.
#[derive(Debug)]
pub struct LruCache<K, V> {
    /// Key-value storage
    store: BoundedStore<K, V>,
    /// LRU access tracker
    lru: LruTracker<K>,
    /// Eviction signal
    notifier: EvictionNotifier<K, V>,
}

impl<K, V> LruCache<K, V>
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
            lru: LruTracker::with_capacity(store.capacity()),
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
    /// Retrieves a value by key and marks the key as most recently used.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        if self.lru.promote(key) {
            debug!("Promoted key to most recently used");
        }
        self.store.get(key)
    }

    // == Peek ==
    /// Retrieves a value without touching recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
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
        self.lru.iter()
    }
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone + Display + Blank,
    V: Blank,
{
    // == Put ==
    /// Stores a key-value pair and marks the key as most recently used.
    ///
    /// Blank keys or values are ignored. If the cache is full and `key` is
    /// new, the least recently used entry is evicted first.
    pub fn put(&mut self, key: K, value: V) -> PutOutcome<K, V> {
        if key.is_blank() || value.is_blank() {
            debug!("Ignoring put with blank key or value");
            return PutOutcome::Rejected;
        }

        if self.lru.promote(&key) {
            debug!(%key, "Overwriting resident key");
            self.store.insert(key, value);
            return PutOutcome::Stored;
        }

        let outcome = if self.store.is_full() {
            self.evict_least_recent()
        } else {
            PutOutcome::Stored
        };

        debug!(%key, "Storing new key");
        self.store.insert(key.clone(), value);
        self.lru.touch(key);

        outcome
    }

    // == Evict Least Recent ==
    fn evict_least_recent(&mut self) -> PutOutcome<K, V> {
        let evicted = self
            .lru
            .evict_oldest()
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

impl<K, V> Default for LruCache<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Cache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone + Display + Blank,
    V: Blank,
{
    fn put(&mut self, key: K, value: V) -> PutOutcome<K, V> {
        LruCache::put(self, key, value)
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        LruCache::get(self, key)
    }

    fn policy(&self) -> Policy {
        Policy::Lru
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
