//! Tracing initialization for binaries and examples embedding the client.

use tracing_subscriber::{fmt, EnvFilter};

use botwire_core::error::{BotWireError, Result};

/// Install the global fmt subscriber, filtered by `RUST_LOG` (default
/// `info`). Call once at startup; a second call fails.
pub fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| BotWireError::Internal(format!("tracing init failed: {e}")))
}
