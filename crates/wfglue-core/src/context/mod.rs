//! Request-scoped context fields for structured logging.
//!
//! A `Context` is an immutable chain of `(Key, value)` frames. Deriving a
//! context never touches the parent, so snapshots can be handed to other tasks
//! freely. The `with_*` helpers attach the well-known workflow identifiers, and
//! `get_log_fields` / `log_span` turn them into log fields.

pub mod chain;
pub mod fields;
pub mod keys;

pub use chain::Context;
pub use fields::{
    attach, get_log_fields, log_span, value, values, with_app_name, with_execution_id, with_job_id,
    with_namespace, with_node_id, with_phase, with_project_domain, with_task_id, with_task_type,
    with_workflow_id,
};
pub use keys::{Key, LOG_KEYS};
