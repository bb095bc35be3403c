use std::io::SeekFrom;
use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tracing::Instrument;

use wfglue_core::context::{self, Context};
use wfglue_core::error::{Result, WfGlueError};

use crate::config::CopyConfig;
use crate::obs::metrics::{Counter, CounterVec, Registry, Summary};

use super::reference::{DataReference, Options};
use super::store::RawStore;
use super::stream::{bytes_stream, RawBody, RawStream};

/// Where a copy failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStage {
    Open,
    Seek,
    Buffer,
    Write,
}

impl CopyStage {
    pub fn as_str(self) -> &'static str {
        match self {
            CopyStage::Open => "open",
            CopyStage::Seek => "seek",
            CopyStage::Buffer => "buffer",
            CopyStage::Write => "write",
        }
    }
}

/// Copy instruments, registered once under a scope prefix.
#[derive(Clone)]
pub struct CopyMetrics {
    latency: Arc<Summary>,
    bytes: Arc<Counter>,
    failures: Arc<CounterVec>,
}

impl CopyMetrics {
    pub fn new(registry: &Registry, scope: &str) -> Result<Self> {
        Ok(Self {
            latency: registry.register_summary(
                &format!("{scope}_copy_latency_us"),
                "Time taken to copy raw data between references.",
            )?,
            bytes: registry.register_counter(
                &format!("{scope}_copy_bytes"),
                "Bytes copied by copies whose size was known.",
            )?,
            failures: registry.register_counter_vec(
                &format!("{scope}_copy_failures"),
                "Failed copies by stage.",
            )?,
        })
    }
}

pub struct CopyImpl {
    store: Arc<dyn RawStore>,
    buffer_unseekable: bool,
    max_buffer_bytes: u64,
    metrics: Option<CopyMetrics>,
}

type StageResult<T> = std::result::Result<T, (CopyStage, WfGlueError)>;

impl CopyImpl {
    /// Relay unseekable sources as-is; no metrics.
    pub fn new(store: Arc<dyn RawStore>) -> Self {
        let defaults = CopyConfig::default();
        Self {
            store,
            buffer_unseekable: defaults.buffer_unseekable,
            max_buffer_bytes: defaults.max_buffer_bytes,
            metrics: None,
        }
    }

    /// Apply `cfg` and, when a registry is given, register copy metrics under `cfg.metrics_scope`.
    pub fn from_config(
        store: Arc<dyn RawStore>,
        cfg: &CopyConfig,
        registry: Option<&Registry>,
    ) -> Result<Self> {
        let metrics = match registry {
            Some(r) => Some(CopyMetrics::new(r, &cfg.metrics_scope)?),
            None => None,
        };
        Ok(Self {
            store,
            buffer_unseekable: cfg.buffer_unseekable,
            max_buffer_bytes: cfg.max_buffer_bytes,
            metrics,
        })
    }

    pub fn with_metrics(mut self, metrics: CopyMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Copy the full content of `source` into `destination`.
    ///
    /// Open, seek and write errors abort the copy and are returned unchanged.
    /// The read stream is dropped on every path.
    pub async fn copy_raw(
        &self,
        ctx: &Context,
        source: &DataReference,
        destination: &DataReference,
        opts: &Options,
    ) -> Result<()> {
        let started = Instant::now();
        let res = self
            .copy_inner(ctx, source, destination, opts)
            .instrument(context::log_span(ctx))
            .await;

        match res {
            Ok(size) => {
                if let Some(m) = &self.metrics {
                    m.latency.observe(started.elapsed().as_micros() as f64);
                    if let Some(n) = size {
                        m.bytes.add(n);
                    }
                }
                Ok(())
            }
            Err((stage, err)) => {
                tracing::warn!(
                    source = %source,
                    destination = %destination,
                    stage = stage.as_str(),
                    error = %err,
                    "raw copy failed"
                );
                if let Some(m) = &self.metrics {
                    m.failures.inc(&[("stage", stage.as_str())]);
                }
                Err(err)
            }
        }
    }

    async fn copy_inner(
        &self,
        ctx: &Context,
        source: &DataReference,
        destination: &DataReference,
        opts: &Options,
    ) -> StageResult<Option<u64>> {
        let stream = self
            .store
            .read_raw(ctx, source)
            .await
            .map_err(|e| (CopyStage::Open, e))?;

        let (size, body): (Option<u64>, RawBody) = match stream {
            RawStream::Seekable(mut r) => {
                let size = r
                    .seek(SeekFrom::End(0))
                    .await
                    .map_err(|e| (CopyStage::Seek, WfGlueError::from(e)))?;
                r.seek(SeekFrom::Start(0))
                    .await
                    .map_err(|e| (CopyStage::Seek, WfGlueError::from(e)))?;
                tracing::debug!(%source, %destination, size, "copying seekable source");
                (Some(size), RawStream::Seekable(r).into_body())
            }
            RawStream::Unseekable(r) if self.buffer_unseekable => {
                let data = self.buffer(r).await.map_err(|e| (CopyStage::Buffer, e))?;
                let size = data.len() as u64;
                tracing::debug!(%source, %destination, size, "copying buffered unseekable source");
                (Some(size), bytes_stream(data).into_body())
            }
            RawStream::Unseekable(r) => {
                tracing::debug!(%source, %destination, "relaying unseekable source, size unknown");
                (None, r)
            }
        };

        self.store
            .write_raw(ctx, destination, size, opts, body)
            .await
            .map_err(|e| (CopyStage::Write, e))?;
        Ok(size)
    }

    async fn buffer(&self, r: RawBody) -> Result<Bytes> {
        let limit = self.max_buffer_bytes;
        let mut buf = Vec::new();
        r.take(limit.saturating_add(1)).read_to_end(&mut buf).await?;
        if buf.len() as u64 > limit {
            return Err(WfGlueError::BufferLimitExceeded { limit });
        }
        Ok(Bytes::from(buf))
    }
}
