//! Command model for the cache driver
//!
//! One command per input line: `put <key> <value>`, `get <key>` or `print`.

use std::str::FromStr;

use crate::error::{CacheError, Result};

/// A single driver instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Store `value` under `key`
    Put { key: String, value: String },
    /// Look up `key`
    Get { key: String },
    /// Render the cache contents
    Print,
}

impl Command {
    /// Parses one input line.
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments. A missing key or
    /// value parses as an empty string, which the cache then ignores.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

impl FromStr for Command {
    type Err = CacheError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));
        let rest = rest.trim_start();

        match verb.to_ascii_lowercase().as_str() {
            "put" => {
                let (key, value) = rest
                    .split_once(char::is_whitespace)
                    .unwrap_or((rest, ""));
                Ok(Command::Put {
                    key: key.to_string(),
                    value: value.trim().to_string(),
                })
            }
            "get" => Ok(Command::Get {
                key: rest.trim().to_string(),
            }),
            "print" if rest.is_empty() => Ok(Command::Print),
            _ => Err(CacheError::InvalidCommand(line.to_string())),
        }
    }
}
