//! Cache Module
//!
//! Provides bounded in-memory caches with FIFO and LRU eviction.

mod entry;
mod fifo;
mod lru;
mod notify;
mod store;
mod traits;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::{Blank, PutOutcome};
pub use fifo::FifoCache;
pub use lru::{LruCache, LruTracker};
pub use notify::{EvictionListener, EvictionNotifier};
pub use store::BoundedStore;
pub use traits::{print_cache, Cache};

use std::num::NonZeroUsize;

// == Public Constants ==
/// Default number of entries a cache holds before it starts evicting
pub const MAX_ITEMS: usize = 4;

pub(crate) const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(MAX_ITEMS) {
    Some(capacity) => capacity,
    None => panic!("MAX_ITEMS must be non-zero"),
};
