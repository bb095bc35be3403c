//! Start-up inside a host that owns the log subscriber. Own test binary: the
//! subscriber is installed before wfglue gets a chance to.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use wfglue_runtime::obs::Registry;
use wfglue_runtime::workqueue::{self, QueueMetrics};
use wfglue_runtime::{config, startup};

#[test]
fn init_keeps_host_subscriber_and_installs_provider() {
    tracing_subscriber::fmt().with_ansi(false).try_init().unwrap();

    let cfg = config::load_from_str("version: 1\n").unwrap();
    let registry = Arc::new(Registry::new());
    startup::init(&cfg, Arc::clone(&registry)).unwrap();

    let jobs = QueueMetrics::new(&*workqueue::provider(), "jobs").unwrap();
    jobs.add();
    assert!(registry.contains("jobs_depth"));
    assert!(registry.render().contains("\njobs_adds 1\n"));
}
