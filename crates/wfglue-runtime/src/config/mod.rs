//! wfglue config loading. Unknown fields are rejected, then the parsed
//! config is validated before it is handed out.

pub mod schema;

use std::fs;

use wfglue_core::error::{Result, WfGlueError};

pub use schema::{CopyConfig, LoggingConfig, WfGlueConfig};

/// Read and validate the wfglue config at `path`.
pub fn load_from_file(path: &str) -> Result<WfGlueConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| WfGlueError::BadConfig(format!("cannot read wfglue config {path}: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<WfGlueConfig> {
    let cfg: WfGlueConfig = serde_yaml::from_str(s)
        .map_err(|e| WfGlueError::BadConfig(format!("wfglue config is not valid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
