//! wfglue core: the shared error surface and request-scoped context fields.
//!
//! This crate carries no runtime or I/O dependencies so the context helpers
//! can be used from any layer that emits structured logs.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here. All fallible paths
//! surface as `WfGlueError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod context;
pub mod error;

pub use context::{Context, Key};
pub use error::{ErrorCode, Result, WfGlueError};
