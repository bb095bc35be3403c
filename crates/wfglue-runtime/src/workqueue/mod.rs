//! Work-queue metrics adapter.
//!
//! A queue implementation asks a `MetricsProvider` for its instruments once
//! per queue name. `PrometheusMetricsProvider` answers by registering them in a
//! `Registry`; `set_provider` makes it the process-wide default.

pub mod prometheus;
pub mod provider;
pub mod queue_metrics;

pub use prometheus::PrometheusMetricsProvider;
pub use provider::{
    provider, set_provider, CounterMetric, GaugeMetric, MetricsProvider, NoopMetric,
    NoopMetricsProvider, SummaryMetric,
};
pub use queue_metrics::QueueMetrics;
