//! Raw data copy between two storage references.
//!
//! The store owns reading and writing; `CopyImpl` only picks the path:
//! seekable sources are measured and written with a known size, unseekable
//! ones are relayed with an unknown size (or buffered, when configured).

pub mod copy;
pub mod reference;
pub mod store;
pub mod stream;

pub use copy::{CopyImpl, CopyMetrics, CopyStage};
pub use reference::{DataReference, Options};
pub use store::RawStore;
pub use stream::{bytes_stream, RawBody, RawStream, SeekableRead};
