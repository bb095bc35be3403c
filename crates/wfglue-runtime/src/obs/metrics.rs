//! Explicit metrics registry.
//!
//! Instruments are plain atomics shared through `Arc`; the registry only owns
//! the name -> instrument index and renders the Prometheus text exposition
//! format. Each name can be registered once. Build one `Registry` per process
//! (or per test) and hand it to whatever registers instruments.

use std::fmt::Write;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::mapref::entry::Entry as MapEntry;
use dashmap::DashMap;

use wfglue_core::error::{Result, WfGlueError};

fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

/// `[a-zA-Z_:][a-zA-Z0-9_:]*`
pub fn is_valid_metric_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
}

#[derive(Debug, Default)]
pub struct Counter {
    value: AtomicU64,
}

impl Counter {
    pub fn inc(&self) {
        self.add(1);
    }

    pub fn add(&self, v: u64) {
        self.value.fetch_add(v, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Default)]
pub struct Gauge {
    value: AtomicI64,
}

impl Gauge {
    pub fn inc(&self) { self.add(1); }
    pub fn dec(&self) { self.add(-1); }

    pub fn add(&self, v: i64) {
        self.value.fetch_add(v, Ordering::Relaxed);
    }

    pub fn set(&self, v: i64) {
        self.value.store(v, Ordering::Relaxed);
    }

    pub fn get(&self) -> i64 {
        self.value.load(Ordering::Relaxed)
    }
}

/// Quantile-free summary: observation count and sum.
#[derive(Debug, Default)]
pub struct Summary {
    count: AtomicU64,
    // f64 bits
    sum: AtomicU64,
}

impl Summary {
    pub fn observe(&self, v: f64) {
        self.count.fetch_add(1, Ordering::Relaxed);
        let _ = self.sum.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |bits| {
            Some((f64::from_bits(bits) + v).to_bits())
        });
    }

    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    pub fn sum(&self) -> f64 {
        f64::from_bits(self.sum.load(Ordering::Relaxed))
    }
}

/// Counter family keyed by label sets.
#[derive(Debug, Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let counter = self.map.entry(label_key(labels)).or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }
}

fn label_key(labels: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut key: Vec<(String, String)> = labels.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

enum Collector {
    Counter(Arc<Counter>),
    Gauge(Arc<Gauge>),
    Summary(Arc<Summary>),
    CounterVec(Arc<CounterVec>),
}

struct Registered {
    help: String,
    collector: Collector,
}

impl Registered {
    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, escape_help(&self.help));
        match &self.collector {
            Collector::Counter(c) => {
                let _ = writeln!(out, "# TYPE {} counter\n{} {}", name, name, c.get());
            }
            Collector::Gauge(g) => {
                let _ = writeln!(out, "# TYPE {} gauge\n{} {}", name, name, g.get());
            }
            Collector::Summary(s) => {
                let _ = writeln!(out, "# TYPE {} summary", name);
                let _ = writeln!(out, "{}_sum {}", name, s.sum());
                let _ = writeln!(out, "{}_count {}", name, s.count());
            }
            Collector::CounterVec(v) => {
                let _ = writeln!(out, "# TYPE {} counter", name);
                let mut rows: Vec<(String, u64)> = v.map.iter()
                    .map(|r| {
                        let label_str = r.key().iter()
                            .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                            .collect::<Vec<_>>().join(",");
                        (label_str, r.value().load(Ordering::Relaxed))
                    })
                    .collect();
                rows.sort();
                for (label_str, val) in rows {
                    let _ = writeln!(out, "{}{{{}}} {}", name, label_str, val);
                }
            }
        }
    }
}

#[derive(Default)]
pub struct Registry {
    entries: DashMap<String, Registered>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_counter(&self, name: &str, help: &str) -> Result<Arc<Counter>> {
        let c = Arc::new(Counter::default());
        self.register(name, help, Collector::Counter(Arc::clone(&c)))?;
        Ok(c)
    }

    pub fn register_gauge(&self, name: &str, help: &str) -> Result<Arc<Gauge>> {
        let g = Arc::new(Gauge::default());
        self.register(name, help, Collector::Gauge(Arc::clone(&g)))?;
        Ok(g)
    }

    pub fn register_summary(&self, name: &str, help: &str) -> Result<Arc<Summary>> {
        let s = Arc::new(Summary::default());
        self.register(name, help, Collector::Summary(Arc::clone(&s)))?;
        Ok(s)
    }

    pub fn register_counter_vec(&self, name: &str, help: &str) -> Result<Arc<CounterVec>> {
        let v = Arc::new(CounterVec::default());
        self.register(name, help, Collector::CounterVec(Arc::clone(&v)))?;
        Ok(v)
    }

    fn register(&self, name: &str, help: &str, collector: Collector) -> Result<()> {
        if !is_valid_metric_name(name) {
            return Err(WfGlueError::InvalidMetricName(name.to_string()));
        }
        match self.entries.entry(name.to_string()) {
            MapEntry::Occupied(_) => Err(WfGlueError::AlreadyRegistered(name.to_string())),
            MapEntry::Vacant(slot) => {
                slot.insert(Registered { help: help.to_string(), collector });
                tracing::debug!(metric = %name, "metric registered");
                Ok(())
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// Render every instrument in Prometheus text exposition format, sorted by name.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for name in self.names() {
            if let Some(entry) = self.entries.get(&name) {
                entry.render(&name, &mut out);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_name_rules() {
        assert!(is_valid_metric_name("queue_depth"));
        assert!(is_valid_metric_name("_x:y9"));
        assert!(!is_valid_metric_name(""));
        assert!(!is_valid_metric_name("9lives"));
        assert!(!is_valid_metric_name("my-queue_depth"));
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let reg = Registry::new();
        reg.register_counter("jobs_adds", "adds").unwrap();
        let err = reg.register_gauge("jobs_adds", "again").err().unwrap();
        assert_eq!(err.code().as_str(), "ALREADY_REGISTERED");
    }

    #[test]
    fn summary_accumulates_sum_and_count() {
        let s = Summary::default();
        s.observe(1.5);
        s.observe(2.0);
        assert_eq!(s.count(), 2);
        assert!((s.sum() - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn render_is_sorted_prometheus_text() {
        let reg = Registry::new();
        let g = reg.register_gauge("b_depth", "depth of b").unwrap();
        let c = reg.register_counter("a_adds", "adds of a").unwrap();
        let v = reg.register_counter_vec("c_failures", "failures").unwrap();
        g.inc();
        g.inc();
        g.dec();
        c.add(3);
        v.inc(&[("stage", "write")]);

        let out = reg.render();
        assert_eq!(
            out,
            "# HELP a_adds adds of a\n# TYPE a_adds counter\na_adds 3\n\
             # HELP b_depth depth of b\n# TYPE b_depth gauge\nb_depth 1\n\
             # HELP c_failures failures\n# TYPE c_failures counter\nc_failures{stage=\"write\"} 1\n"
        );
    }
}
