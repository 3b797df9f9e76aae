//! Session Module
//!
//! Applies driver commands to a cache and renders their output.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use crate::cache::{print_cache, Cache, FifoCache, LruCache, PutOutcome};
use crate::config::{Config, OutputFormat, Policy};
use crate::error::{CacheError, Result};
use crate::models::{CacheSnapshot, Command};

/// A cache of text keys and values driven by [`Command`]s.
pub struct Session {
    /// The cache under test
    cache: Box<dyn Cache<String, String>>,
    /// Rendering of `print` commands
    output: OutputFormat,
}

impl Session {
    /// Creates a new Session around an existing cache.
    pub fn new(cache: Box<dyn Cache<String, String>>, output: OutputFormat) -> Self {
        Self { cache, output }
    }

    /// Creates a new Session from configuration.
    ///
    /// Builds a cache with the configured policy and capacity.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let cache: Box<dyn Cache<String, String>> = match config.policy {
            Policy::Fifo => Box::new(FifoCache::<String, String>::with_capacity(
                config.max_items,
            )?),
            Policy::Lru => Box::new(LruCache::<String, String>::with_capacity(
                config.max_items,
            )?),
        };
        Ok(Self::new(cache, config.output))
    }

    pub fn cache(&self) -> &dyn Cache<String, String> {
        self.cache.as_ref()
    }

    // == Execute ==
    /// Applies one command, returning the text it prints, if any.
    ///
    /// - `put` prints `DISCARD: <key>` when it evicts
    /// - `get` prints the value, or `None` when the key is absent
    /// - `print` prints the cache contents
    pub fn execute(&mut self, command: Command) -> Result<Option<String>> {
        match command {
            Command::Put { key, value } => match self.cache.put(key, value) {
                PutOutcome::Evicted { key, .. } => Ok(Some(format!("DISCARD: {}", key))),
                PutOutcome::Stored => Ok(None),
                PutOutcome::Rejected => {
                    debug!("Put ignored");
                    Ok(None)
                }
            },
            Command::Get { key } => Ok(Some(
                self.cache
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| "None".to_string()),
            )),
            Command::Print => self.render().map(Some),
        }
    }

    /// Parses and applies one input line.
    pub fn execute_line(&mut self, line: &str) -> Result<Option<String>> {
        match Command::parse(line)? {
            Some(command) => self.execute(command),
            None => Ok(None),
        }
    }

    // == Run ==
    /// Executes every line of `input`, writing command output to `output`.
    ///
    /// Lines that fail to parse are logged and skipped. Returns the number of
    /// lines that were skipped.
    pub fn run<R, W>(&mut self, input: R, output: &mut W) -> io::Result<usize>
    where
        R: BufRead,
        W: Write,
    {
        let mut skipped = 0;
        for (index, line) in input.lines().enumerate() {
            let line = line?;
            match self.execute_line(&line) {
                Ok(Some(text)) => writeln!(output, "{}", text)?,
                Ok(None) => {}
                Err(err) => {
                    warn!(line = index + 1, "Skipping input: {}", err);
                    skipped += 1;
                }
            }
        }
        output.flush()?;

        info!(
            "Session finished: {} entries resident, {} lines skipped",
            self.cache.len(),
            skipped
        );
        Ok(skipped)
    }

    fn render(&self) -> Result<String> {
        match self.output {
            OutputFormat::Text => Ok(print_cache(self.cache.as_ref()).trim_end().to_string()),
            OutputFormat::Json => {
                let snapshot = CacheSnapshot::capture(self.cache.as_ref());
                serde_json::to_string(&snapshot)
                    .map_err(|e| CacheError::Serialization(e.to_string()))
            }
        }
    }
}
