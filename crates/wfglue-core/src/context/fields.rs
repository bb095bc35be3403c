use std::collections::{BTreeMap, HashMap};

use tracing::{field, Span};

use super::chain::Context;
use super::keys::{Key, LOG_KEYS};

/// Set `key`. Nested keys append to an existing value as `<old>/<new>`.
pub fn attach(ctx: &Context, key: Key, v: &str) -> Context {
    match ctx.value(key) {
        Some(existing) if key.is_nested() => ctx.with_value(key, format!("{existing}/{v}")),
        _ => ctx.with_value(key, v),
    }
}

pub fn with_namespace(ctx: &Context, namespace: &str) -> Context {
    ctx.with_value(Key::Namespace, namespace)
}

/// Sets the job id. An existing job id becomes the prefix: `<old>/<new>`.
pub fn with_job_id(ctx: &Context, job_id: &str) -> Context {
    attach(ctx, Key::JobId, job_id)
}

pub fn with_app_name(ctx: &Context, app_name: &str) -> Context {
    ctx.with_value(Key::AppName, app_name)
}

pub fn with_phase(ctx: &Context, phase: &str) -> Context {
    ctx.with_value(Key::Phase, phase)
}

pub fn with_execution_id(ctx: &Context, exec_id: &str) -> Context {
    ctx.with_value(Key::ExecId, exec_id)
}

/// Sets the node id. An existing node id becomes the prefix: `<old>/<new>`.
pub fn with_node_id(ctx: &Context, node_id: &str) -> Context {
    attach(ctx, Key::NodeId, node_id)
}

pub fn with_workflow_id(ctx: &Context, workflow: &str) -> Context {
    ctx.with_value(Key::WorkflowId, workflow)
}

pub fn with_project_domain(ctx: &Context, project: &str, domain: &str) -> Context {
    ctx.with_value(Key::Project, project)
        .with_value(Key::Domain, domain)
}

pub fn with_task_id(ctx: &Context, task_id: &str) -> Context {
    ctx.with_value(Key::TaskId, task_id)
}

pub fn with_task_type(ctx: &Context, task_type: &str) -> Context {
    ctx.with_value(Key::TaskType, task_type)
}

/// Value under `key`, or an empty string.
pub fn value(ctx: &Context, key: Key) -> String {
    ctx.value(key).unwrap_or_default().to_string()
}

/// Every requested key mapped to its value; unset keys map to "".
pub fn values(ctx: &Context, keys: &[Key]) -> HashMap<String, String> {
    keys.iter()
        .map(|k| (k.as_str().to_string(), value(ctx, *k)))
        .collect()
}

/// Log-whitelisted fields that are set on the context.
pub fn get_log_fields(ctx: &Context) -> BTreeMap<&'static str, String> {
    LOG_KEYS
        .iter()
        .filter_map(|k| ctx.value(*k).map(|v| (k.as_str(), v.to_string())))
        .collect()
}

/// Span carrying the log fields of `ctx`; events emitted inside it inherit them.
pub fn log_span(ctx: &Context) -> Span {
    let span = tracing::info_span!(
        "ctx",
        app_name = field::Empty,
        job_id = field::Empty,
        ns = field::Empty,
        exec_id = field::Empty,
        node = field::Empty,
        wf = field::Empty,
        tasktype = field::Empty,
        phase = field::Empty,
    );
    for k in LOG_KEYS {
        if let Some(v) = ctx.value(k) {
            span.record(k.as_str(), v);
        }
    }
    span
}
