use std::io::Cursor;

use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncSeek};

/// Readable and seekable; object-safe so stores can box it.
pub trait SeekableRead: AsyncRead + AsyncSeek + Send + Unpin {}

impl<T: AsyncRead + AsyncSeek + Send + Unpin> SeekableRead for T {}

/// Body handed to `RawStore::write_raw`.
pub type RawBody = Box<dyn AsyncRead + Send + Unpin>;

/// Read stream returned by `RawStore::read_raw`.
///
/// The store decides once, at open time, whether the stream can seek.
/// Dropping the stream closes it.
pub enum RawStream {
    Seekable(Box<dyn SeekableRead>),
    Unseekable(RawBody),
}

impl RawStream {
    pub fn seekable(r: impl SeekableRead + 'static) -> Self {
        RawStream::Seekable(Box::new(r))
    }

    pub fn unseekable(r: impl AsyncRead + Send + Unpin + 'static) -> Self {
        RawStream::Unseekable(Box::new(r))
    }

    pub fn is_seekable(&self) -> bool {
        matches!(self, RawStream::Seekable(_))
    }

    /// Forget the seek capability.
    pub fn into_body(self) -> RawBody {
        match self {
            RawStream::Seekable(r) => Box::new(r),
            RawStream::Unseekable(r) => r,
        }
    }
}

impl std::fmt::Debug for RawStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawStream::Seekable(_) => f.write_str("RawStream::Seekable"),
            RawStream::Unseekable(_) => f.write_str("RawStream::Unseekable"),
        }
    }
}

/// In-memory seekable stream over `data`.
pub fn bytes_stream(data: Bytes) -> RawStream {
    RawStream::seekable(Cursor::new(data))
}
