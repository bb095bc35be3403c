use std::sync::Arc;
use std::time::Instant;

use wfglue_core::error::Result;

use super::provider::{CounterMetric, GaugeMetric, MetricsProvider, SummaryMetric};

/// The instrument set a queue holds for its lifetime.
#[derive(Clone)]
pub struct QueueMetrics {
    name: String,
    depth: Arc<dyn GaugeMetric>,
    adds: Arc<dyn CounterMetric>,
    latency: Arc<dyn SummaryMetric>,
    work_duration: Arc<dyn SummaryMetric>,
    retries: Arc<dyn CounterMetric>,
}

impl QueueMetrics {
    /// Ask `provider` for all five instruments of queue `name`.
    pub fn new(provider: &dyn MetricsProvider, name: &str) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            depth: provider.new_depth_metric(name)?,
            adds: provider.new_adds_metric(name)?,
            latency: provider.new_latency_metric(name)?,
            work_duration: provider.new_work_duration_metric(name)?,
            retries: provider.new_retries_metric(name)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Item enqueued.
    pub fn add(&self) {
        self.adds.inc();
        self.depth.inc();
    }

    /// Item handed to a worker; records how long it waited.
    pub fn get(&self, enqueued_at: Instant) {
        self.depth.dec();
        self.latency.observe(micros_since(enqueued_at));
    }

    /// Worker finished the item; records processing time.
    pub fn done(&self, started_at: Instant) {
        self.work_duration.observe(micros_since(started_at));
    }

    /// Item re-enqueued after a failure.
    pub fn retry(&self) {
        self.retries.inc();
    }
}

fn micros_since(t: Instant) -> f64 {
    t.elapsed().as_micros() as f64
}
