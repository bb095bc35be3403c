#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::time::Instant;

use wfglue_runtime::obs::Registry;
use wfglue_runtime::workqueue::{
    MetricsProvider, NoopMetricsProvider, PrometheusMetricsProvider, QueueMetrics,
};

#[test]
fn registers_five_instruments_per_queue() {
    let registry = Arc::new(Registry::new());
    let provider = PrometheusMetricsProvider::new(Arc::clone(&registry));

    QueueMetrics::new(&provider, "node_events").unwrap();

    assert_eq!(
        registry.names(),
        vec![
            "node_events_adds",
            "node_events_depth",
            "node_events_queue_latency_us",
            "node_events_retries",
            "node_events_work_duration_us",
        ]
    );
}

#[test]
fn help_text_names_the_queue() {
    let registry = Arc::new(Registry::new());
    let provider = PrometheusMetricsProvider::new(Arc::clone(&registry));
    provider.new_depth_metric("jobs").unwrap();
    provider.new_adds_metric("jobs").unwrap();
    provider.new_latency_metric("jobs").unwrap();
    provider.new_work_duration_metric("jobs").unwrap();
    provider.new_retries_metric("jobs").unwrap();

    let out = registry.render();
    for help in [
        "# HELP jobs_depth Current depth of workqueue: jobs\n",
        "# HELP jobs_adds Total number of adds handled by workqueue: jobs\n",
        "# HELP jobs_queue_latency_us How long an item stays in workqueue jobs before being requested.\n",
        "# HELP jobs_work_duration_us How long processing an item from workqueue jobs takes.\n",
        "# HELP jobs_retries Total number of retries handled by workqueue: jobs\n",
    ] {
        assert!(out.contains(help), "missing {help:?} in\n{out}");
    }
    assert!(out.contains("# TYPE jobs_depth gauge\n"));
    assert!(out.contains("# TYPE jobs_adds counter\n"));
    assert!(out.contains("# TYPE jobs_queue_latency_us summary\n"));
    assert!(out.contains("# TYPE jobs_work_duration_us summary\n"));
    assert!(out.contains("# TYPE jobs_retries counter\n"));
}

#[test]
fn same_queue_twice_fails() {
    let registry = Arc::new(Registry::new());
    let provider = PrometheusMetricsProvider::new(registry);

    QueueMetrics::new(&provider, "jobs").unwrap();
    let err = QueueMetrics::new(&provider, "jobs").err().expect("duplicate must fail");
    assert_eq!(err.code().as_str(), "ALREADY_REGISTERED");
}

#[test]
fn invalid_queue_name_fails() {
    let provider = PrometheusMetricsProvider::new(Arc::new(Registry::new()));
    let err = provider.new_adds_metric("my-queue").err().expect("must fail");
    assert_eq!(err.code().as_str(), "INVALID_METRIC_NAME");
}

#[test]
fn queue_lifecycle_updates_instruments() {
    let registry = Arc::new(Registry::new());
    let provider = PrometheusMetricsProvider::new(Arc::clone(&registry));
    let m = QueueMetrics::new(&provider, "wf").unwrap();
    assert_eq!(m.name(), "wf");

    let enqueued = Instant::now();
    m.add();
    m.add();
    m.get(enqueued);
    let started = Instant::now();
    m.done(started);
    m.retry();

    let out = registry.render();
    assert!(out.contains("\nwf_adds 2\n"));
    assert!(out.contains("\nwf_depth 1\n"));
    assert!(out.contains("\nwf_queue_latency_us_count 1\n"));
    assert!(out.contains("\nwf_work_duration_us_count 1\n"));
    assert!(out.contains("\nwf_retries 1\n"));
}

#[test]
fn noop_provider_never_fails() {
    let provider = NoopMetricsProvider;
    let a = QueueMetrics::new(&provider, "jobs").unwrap();
    let b = QueueMetrics::new(&provider, "jobs").unwrap();
    a.add();
    b.retry();
}
