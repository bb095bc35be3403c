//! wfglue: shared glue for workflow services.
//!
//! - `core`: errors and the request-scoped logging [`Context`].
//! - `runtime`: config loading, the metrics [`Registry`], work-queue metrics
//!   and the raw storage copy helper.
//!
//! The types most services touch are re-exported at the root.

pub mod core {
    pub use wfglue_core::*;
}

pub mod runtime {
    pub use wfglue_runtime::*;
}

pub use wfglue_core::{Context, Key, Result, WfGlueError};
pub use wfglue_runtime::config::WfGlueConfig;
pub use wfglue_runtime::obs::Registry;
pub use wfglue_runtime::storage::{CopyImpl, DataReference, Options, RawStore};
pub use wfglue_runtime::workqueue::{PrometheusMetricsProvider, QueueMetrics};
