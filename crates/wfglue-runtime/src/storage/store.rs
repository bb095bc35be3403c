use async_trait::async_trait;

use wfglue_core::context::Context;
use wfglue_core::error::Result;

use super::reference::{DataReference, Options};
use super::stream::{RawBody, RawStream};

/// Storage collaborator the copy helper reads from and writes to.
#[async_trait]
pub trait RawStore: Send + Sync {
    /// Open a read stream on `reference`.
    async fn read_raw(&self, ctx: &Context, reference: &DataReference) -> Result<RawStream>;

    /// Write `body` to `reference`. `size` is `None` when the length is unknown.
    async fn write_raw(
        &self,
        ctx: &Context,
        reference: &DataReference,
        size: Option<u64>,
        opts: &Options,
        body: RawBody,
    ) -> Result<()>;
}
