use std::sync::{Arc, OnceLock};

use wfglue_core::error::{Result, WfGlueError};

/// Gauge a queue moves up and down (depth).
pub trait GaugeMetric: Send + Sync {
    fn inc(&self);
    fn dec(&self);
}

/// Monotonic counter (adds, retries).
pub trait CounterMetric: Send + Sync {
    fn inc(&self);
}

/// Distribution of observations (latency, work duration).
pub trait SummaryMetric: Send + Sync {
    fn observe(&self, v: f64);
}

/// Factory a work-queue calls once per queue name to obtain its instruments.
pub trait MetricsProvider: Send + Sync {
    fn new_depth_metric(&self, name: &str) -> Result<Arc<dyn GaugeMetric>>;
    fn new_adds_metric(&self, name: &str) -> Result<Arc<dyn CounterMetric>>;
    fn new_latency_metric(&self, name: &str) -> Result<Arc<dyn SummaryMetric>>;
    fn new_work_duration_metric(&self, name: &str) -> Result<Arc<dyn SummaryMetric>>;
    fn new_retries_metric(&self, name: &str) -> Result<Arc<dyn CounterMetric>>;
}

/// Instrument that discards every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMetric;

impl GaugeMetric for NoopMetric {
    fn inc(&self) {}
    fn dec(&self) {}
}

impl CounterMetric for NoopMetric {
    fn inc(&self) {}
}

impl SummaryMetric for NoopMetric {
    fn observe(&self, _v: f64) {}
}

/// Provider used until a real one is installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMetricsProvider;

impl MetricsProvider for NoopMetricsProvider {
    fn new_depth_metric(&self, _name: &str) -> Result<Arc<dyn GaugeMetric>> {
        Ok(Arc::new(NoopMetric))
    }
    fn new_adds_metric(&self, _name: &str) -> Result<Arc<dyn CounterMetric>> {
        Ok(Arc::new(NoopMetric))
    }
    fn new_latency_metric(&self, _name: &str) -> Result<Arc<dyn SummaryMetric>> {
        Ok(Arc::new(NoopMetric))
    }
    fn new_work_duration_metric(&self, _name: &str) -> Result<Arc<dyn SummaryMetric>> {
        Ok(Arc::new(NoopMetric))
    }
    fn new_retries_metric(&self, _name: &str) -> Result<Arc<dyn CounterMetric>> {
        Ok(Arc::new(NoopMetric))
    }
}

static PROVIDER: OnceLock<Arc<dyn MetricsProvider>> = OnceLock::new();

/// Install the process-wide provider. Only the first call succeeds.
pub fn set_provider(provider: Arc<dyn MetricsProvider>) -> Result<()> {
    PROVIDER
        .set(provider)
        .map_err(|_| WfGlueError::ProviderAlreadySet)
}

/// Installed provider, or the no-op provider when none was installed.
pub fn provider() -> Arc<dyn MetricsProvider> {
    match PROVIDER.get() {
        Some(p) => Arc::clone(p),
        None => Arc::new(NoopMetricsProvider),
    }
}
