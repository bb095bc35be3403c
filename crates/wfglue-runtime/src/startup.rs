//! Process start-up wiring.

use std::sync::Arc;

use wfglue_core::error::Result;

use crate::config::WfGlueConfig;
use crate::obs::{logging, metrics::Registry};
use crate::workqueue::{self, PrometheusMetricsProvider};

/// Make `registry` back the process-wide work-queue metrics provider, then
/// install logging.
///
/// An invalid log filter or an already installed provider is fatal. A log
/// subscriber owned by the host process is kept and only warned about.
pub fn init(cfg: &WfGlueConfig, registry: Arc<Registry>) -> Result<()> {
    let filter = logging::build_filter(&cfg.logging)?;
    workqueue::set_provider(Arc::new(PrometheusMetricsProvider::new(registry)))?;
    if let Err(e) = logging::install(filter, cfg.logging.ansi) {
        tracing::warn!(error = %e, "log subscriber already installed, keeping it");
    }
    tracing::info!(
        buffer_unseekable = cfg.copy.buffer_unseekable,
        metrics_scope = %cfg.copy.metrics_scope,
        "wfglue runtime initialized"
    );
    Ok(())
}
