//! Log parsing and analysis error types.

use thiserror::Error;

/// Errors that can occur while parsing or analyzing logs.
///
/// Malformed individual lines never surface here; parsers absorb them.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("log file not found: {0}")]
    NotFound(String),

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("schema error: JSON log is missing required keys: {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("invalid analyzer input: {0}")]
    InvalidInput(String),

    #[error("invalid log format: {0}")]
    Format(String),
}

/// Convenience alias for log parsing and analysis results.
pub type LogResult<T> = Result<T, LogError>;

impl LogError {
    /// Map an I/O error for `path`, keeping "not found" distinct from other failures.
    pub fn from_io(path: &str, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path.to_string())
        } else {
            Self::Io(format!("{path}: {err}"))
        }
    }
}
