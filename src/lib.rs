//! Bounded Cache - small in-memory key-value caches
//!
//! Provides a FIFO-evicting and an LRU-evicting cache over a shared bounded
//! store, plus a line-oriented driver for exercising them.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod session;

pub use cache::{Cache, FifoCache, LruCache, PutOutcome, MAX_ITEMS};
pub use config::Config;
pub use error::{CacheError, Result};
pub use session::Session;
