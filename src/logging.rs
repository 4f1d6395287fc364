//! Logging setup for binaries embedding this crate.
//!
//! Library code only emits `tracing` events; installing a subscriber is
//! left to the embedding application. This helper wires up a sensible
//! default for services that have no subscriber of their own.

use tracing_subscriber::EnvFilter;

/// Initialize a formatting subscriber at the given level.
///
/// `RUST_LOG` takes precedence over `level` when set. Returns an error if
/// a global subscriber is already installed.
pub fn init(level: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()?;

    Ok(())
}
