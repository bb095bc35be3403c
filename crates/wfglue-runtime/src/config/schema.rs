use serde::Deserialize;
use wfglue_core::error::{Result, WfGlueError};

use crate::obs::metrics::is_valid_metric_name;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WfGlueConfig {
    pub version: u32,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub copy: CopyConfig,
}

impl WfGlueConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(WfGlueError::UnsupportedVersion);
        }

        self.logging.validate()?;
        self.copy.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// EnvFilter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,

    #[serde(default = "default_ansi")]
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            ansi: default_ansi(),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.filter.trim().is_empty() {
            return Err(WfGlueError::BadConfig("logging.filter must not be empty".into()));
        }
        Ok(())
    }
}

fn default_filter() -> String {
    "info".into()
}
fn default_ansi() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CopyConfig {
    /// Read unseekable sources fully so the writer gets a known size.
    #[serde(default)]
    pub buffer_unseekable: bool,

    #[serde(default = "default_max_buffer_bytes")]
    pub max_buffer_bytes: u64,

    /// Prefix for the copy instruments (`<scope>_copy_latency_us`, ...).
    #[serde(default = "default_metrics_scope")]
    pub metrics_scope: String,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            buffer_unseekable: false,
            max_buffer_bytes: default_max_buffer_bytes(),
            metrics_scope: default_metrics_scope(),
        }
    }
}

impl CopyConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_buffer_bytes == 0 {
            return Err(WfGlueError::BadConfig("copy.max_buffer_bytes must be > 0".into()));
        }
        if !is_valid_metric_name(&self.metrics_scope) {
            return Err(WfGlueError::BadConfig(format!(
                "copy.metrics_scope is not a valid metric prefix: {}",
                self.metrics_scope
            )));
        }
        Ok(())
    }
}

fn default_max_buffer_bytes() -> u64 {
    64 * 1024 * 1024
}
fn default_metrics_scope() -> String {
    "storage".into()
}
