//! Bounded Cache driver
//!
//! Reads cache commands from stdin and prints their output:
//!
//! ```text
//! put A Hello
//! get A
//! print
//! ```

use std::io::{self, BufWriter};

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bounded_cache::{Config, Session};

/// Main entry point for the cache driver.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the cache for the configured policy
/// 4. Execute stdin line by line, writing output to stdout
fn main() -> anyhow::Result<()> {
    // Defaults to "warn" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bounded_cache=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: max_items={}, policy={}, output={:?}",
        config.max_items, config.policy, config.output
    );

    let mut session = Session::from_config(&config).context("invalid cache configuration")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let skipped = session
        .run(stdin.lock(), &mut out)
        .context("failed to process input")?;

    info!("Driver finished, {} lines skipped", skipped);
    Ok(())
}
