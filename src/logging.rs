//! Logging setup for the binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the process entry point. Output goes to stderr so it never interleaves
//! with the runner's board output on stdout.

use anyhow::{anyhow, Result};
use tracing::{info, Level};
use tracing_subscriber::prelude::*;

/// Install the global subscriber at `level`. Fails if one is already set.
pub fn init(level: Level) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .try_init()
        .map_err(|e| anyhow!("logging: {}", e))?;

    info!("Logging initialized at level: {}", level);
    Ok(())
}
