//! Shared error type across wfglue crates.

use thiserror::Error;

/// Stable error codes, independent of the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Local I/O failure (read, seek).
    Io,
    /// Failure reported by a storage collaborator.
    Storage,
    /// Metric name already taken in the registry.
    AlreadyRegistered,
    /// Metric name is not a valid Prometheus identifier.
    InvalidMetricName,
    /// String does not name a context key.
    UnknownKey,
    /// Process-wide metrics provider installed twice.
    ProviderAlreadySet,
    /// In-memory buffering limit hit.
    BufferLimitExceeded,
    /// Invalid configuration.
    BadConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and assertions.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Io => "IO",
            ErrorCode::Storage => "STORAGE",
            ErrorCode::AlreadyRegistered => "ALREADY_REGISTERED",
            ErrorCode::InvalidMetricName => "INVALID_METRIC_NAME",
            ErrorCode::UnknownKey => "UNKNOWN_KEY",
            ErrorCode::ProviderAlreadySet => "PROVIDER_ALREADY_SET",
            ErrorCode::BufferLimitExceeded => "BUFFER_LIMIT_EXCEEDED",
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, WfGlueError>;

/// Unified error type used by core and runtime.
#[derive(Debug, Error)]
pub enum WfGlueError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage: {0}")]
    Storage(String),
    #[error("metric already registered: {0}")]
    AlreadyRegistered(String),
    #[error("invalid metric name: {0}")]
    InvalidMetricName(String),
    #[error("unknown context key: {0}")]
    UnknownKey(String),
    #[error("metrics provider already set")]
    ProviderAlreadySet,
    #[error("unseekable stream exceeds buffer limit of {limit} bytes")]
    BufferLimitExceeded { limit: u64 },
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl WfGlueError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            WfGlueError::Io(_) => ErrorCode::Io,
            WfGlueError::Storage(_) => ErrorCode::Storage,
            WfGlueError::AlreadyRegistered(_) => ErrorCode::AlreadyRegistered,
            WfGlueError::InvalidMetricName(_) => ErrorCode::InvalidMetricName,
            WfGlueError::UnknownKey(_) => ErrorCode::UnknownKey,
            WfGlueError::ProviderAlreadySet => ErrorCode::ProviderAlreadySet,
            WfGlueError::BufferLimitExceeded { .. } => ErrorCode::BufferLimitExceeded,
            WfGlueError::BadConfig(_) => ErrorCode::BadConfig,
            WfGlueError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            WfGlueError::Internal(_) => ErrorCode::Internal,
        }
    }
}
