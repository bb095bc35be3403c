//! Observability: log subscriber setup and the in-process metrics registry.
//!
//! Metrics are stored as atomics behind an explicit `Registry` and rendered in
//! Prometheus text format on demand; nothing here serves HTTP.

pub mod logging;
pub mod metrics;

pub use metrics::{Counter, CounterVec, Gauge, Registry, Summary};
