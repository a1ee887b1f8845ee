//! Report generation error types.

use thiserror::Error;

/// Errors that can occur while rendering or writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error("unknown report kind: {0}")]
    UnknownKind(String),
}

/// Convenience alias for report results.
pub type ReportResult<T> = Result<T, ReportError>;
