//! Configuration Module
//!
//! Handles loading and managing driver configuration from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::cache::MAX_ITEMS;
use crate::error::{CacheError, Result};

// == Policy ==
/// Eviction policy a cache applies once it is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Evict the earliest inserted key
    Fifo,
    /// Evict the least recently used key
    Lru,
}

impl FromStr for Policy {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            _ => Err(CacheError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Fifo => f.write_str("fifo"),
            Policy::Lru => f.write_str("lru"),
        }
    }
}

// == Output Format ==
/// How the driver renders `print` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Current cache:` header followed by `key: value` lines
    Text,
    /// One JSON snapshot object per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(CacheError::UnknownFormat(s.to_string())),
        }
    }
}

/// Driver configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub max_items: usize,
    /// Eviction policy of the cache
    pub policy: Policy,
    /// Rendering of `print` commands
    pub output: OutputFormat,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// Unparsable values fall back to their defaults.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_ITEMS` - Maximum cache entries (default: 4)
    /// - `CACHE_POLICY` - `fifo` or `lru` (default: lru)
    /// - `CACHE_OUTPUT` - `text` or `json` (default: text)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_items: env_or("CACHE_MAX_ITEMS", defaults.max_items),
            policy: env_or("CACHE_POLICY", defaults.policy),
            output: env_or("CACHE_OUTPUT", defaults.output),
        }
    }

    /// Checks values that parse but cannot be used.
    pub fn validate(&self) -> Result<()> {
        if self.max_items == 0 {
            return Err(CacheError::ZeroCapacity);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_items: MAX_ITEMS,
            policy: Policy::Lru,
            output: OutputFormat::Text,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
