//! Error types for the cache crate
//!
//! Cache operations themselves never fail; these errors cover construction,
//! configuration and the command driver.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Capacity of zero can never hold an entry
    #[error("Capacity must be greater than zero")]
    ZeroCapacity,

    /// Driver line that does not parse as a command
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Eviction policy name not recognised
    #[error("Unknown eviction policy: {0}")]
    UnknownPolicy(String),

    /// Output format name not recognised
    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    /// Snapshot could not be rendered as JSON
    #[error("Serialization error: {0}")]
    Serialization(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache crate.
pub type Result<T> = std::result::Result<T, CacheError>;
