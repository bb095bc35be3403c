//! Log subscriber installation.

use tracing_subscriber::{fmt, EnvFilter};

use wfglue_core::error::{Result, WfGlueError};

use crate::config::LoggingConfig;

/// Build the filter: `RUST_LOG` wins, the configured directive is the fallback.
pub fn build_filter(cfg: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&cfg.filter)
            .map_err(|e| WfGlueError::BadConfig(format!("invalid logging.filter: {e}"))),
    }
}

/// Install the global fmt subscriber with a prebuilt filter.
/// Fails with `Internal` if the process already has one.
pub fn install(filter: EnvFilter, ansi: bool) -> Result<()> {
    fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .try_init()
        .map_err(|e| WfGlueError::Internal(format!("logging init failed: {e}")))
}

/// Build the filter from `cfg` and install the global fmt subscriber.
pub fn init(cfg: &LoggingConfig) -> Result<()> {
    install(build_filter(cfg)?, cfg.ansi)
}
