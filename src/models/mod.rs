//! Driver models
//!
//! Commands read by the driver and serializable views of cache contents.

pub mod command;
pub mod snapshot;

// Re-export commonly used types
pub use command::Command;
pub use snapshot::{CacheSnapshot, SnapshotEntry};
