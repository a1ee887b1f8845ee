//! Log parsing and analysis core for LogFlow.
//!
//! Provides two line-oriented parsers (fixed-pattern text and newline-delimited
//! JSON) that normalize input into canonical [`LogRecord`]s, a `LogSource`
//! abstraction for testability, a format registry, and the [`Analyzer`] that
//! turns a record collection into an [`AnalysisResult`].

pub mod analyzer;
pub mod error;
pub mod mock;
pub mod parsers;
pub mod registry;
pub mod source;
pub mod types;

// Re-export key types for convenience
pub use analyzer::{Analyzer, DEFAULT_TOP_ERRORS};
pub use error::{LogError, LogResult};
pub use mock::MockLogSource;
pub use parsers::LogParser;
pub use registry::ParserRegistry;
pub use source::{FileLogSource, LogSource};
pub use types::{
    AnalysisResult, ErrorCount, HourlyActivity, LevelCount, LogFormat, LogPeriod, LogRecord,
};
