//! Eviction Notification Module
//!
//! Every eviction is logged as `DISCARD: <key>` and handed to an optional
//! caller-supplied listener.

use std::fmt;

use tracing::info;

/// Callback invoked with each evicted key and value.
///
/// `Send` so a cache with a listener can move to, or be shared with, another
/// thread behind a lock.
pub type EvictionListener<K, V> = Box<dyn FnMut(&K, &V) + Send>;

// == Eviction Notifier ==
/// Emits the eviction signal for a cache.
pub struct EvictionNotifier<K, V> {
    listener: Option<EvictionListener<K, V>>,
}

impl<K, V> EvictionNotifier<K, V> {
    // == Constructor ==
    /// Creates a notifier that only logs.
    pub fn new() -> Self {
        Self { listener: None }
    }

    /// Replaces the listener.
    pub fn set_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&K, &V) + Send + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    // == Notify ==
    /// Reports that `key` was evicted.
    pub fn notify(&mut self, key: &K, value: &V)
    where
        K: fmt::Display,
    {
        info!("DISCARD: {}", key);
        if let Some(listener) = self.listener.as_mut() {
            listener(key, value);
        }
    }
}

impl<K, V> Default for EvictionNotifier<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for EvictionNotifier<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvictionNotifier")
            .field("has_listener", &self.has_listener())
            .finish()
    }
}
