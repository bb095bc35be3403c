//! Prometheus-style provider backed by an explicit `Registry`.

use std::sync::Arc;

use wfglue_core::error::Result;

use crate::obs::metrics::{Counter, Gauge, Registry, Summary};

use super::provider::{CounterMetric, GaugeMetric, MetricsProvider, SummaryMetric};

impl GaugeMetric for Gauge {
    fn inc(&self) { Gauge::inc(self) }
    fn dec(&self) { Gauge::dec(self) }
}

impl CounterMetric for Counter {
    fn inc(&self) { Counter::inc(self) }
}

impl SummaryMetric for Summary {
    fn observe(&self, v: f64) { Summary::observe(self, v) }
}

/// Registers one instrument per factory call as `<queue>_<metric>`.
/// A second queue with the same name fails with `AlreadyRegistered`.
#[derive(Clone)]
pub struct PrometheusMetricsProvider {
    registry: Arc<Registry>,
}

impl PrometheusMetricsProvider {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl MetricsProvider for PrometheusMetricsProvider {
    fn new_depth_metric(&self, name: &str) -> Result<Arc<dyn GaugeMetric>> {
        let depth: Arc<dyn GaugeMetric> = self.registry.register_gauge(
            &format!("{name}_depth"),
            &format!("Current depth of workqueue: {name}"),
        )?;
        Ok(depth)
    }

    fn new_adds_metric(&self, name: &str) -> Result<Arc<dyn CounterMetric>> {
        let adds: Arc<dyn CounterMetric> = self.registry.register_counter(
            &format!("{name}_adds"),
            &format!("Total number of adds handled by workqueue: {name}"),
        )?;
        Ok(adds)
    }

    fn new_latency_metric(&self, name: &str) -> Result<Arc<dyn SummaryMetric>> {
        let latency: Arc<dyn SummaryMetric> = self.registry.register_summary(
            &format!("{name}_queue_latency_us"),
            &format!("How long an item stays in workqueue {name} before being requested."),
        )?;
        Ok(latency)
    }

    fn new_work_duration_metric(&self, name: &str) -> Result<Arc<dyn SummaryMetric>> {
        let work_duration: Arc<dyn SummaryMetric> = self.registry.register_summary(
            &format!("{name}_work_duration_us"),
            &format!("How long processing an item from workqueue {name} takes."),
        )?;
        Ok(work_duration)
    }

    fn new_retries_metric(&self, name: &str) -> Result<Arc<dyn CounterMetric>> {
        let retries: Arc<dyn CounterMetric> = self.registry.register_counter(
            &format!("{name}_retries"),
            &format!("Total number of retries handled by workqueue: {name}"),
        )?;
        Ok(retries)
    }
}
