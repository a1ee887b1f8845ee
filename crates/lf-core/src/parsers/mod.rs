//! Line-oriented log parsers and format detection.
//!
//! Every parser turns a source into a canonical record collection. Malformed
//! lines are absorbed here and never reach the caller as errors.

pub mod json_lines;
pub mod pattern;

pub use json_lines::JsonLinesParser;
pub use pattern::PatternParser;

use crate::error::LogResult;
use crate::source::{FileLogSource, LogSource};
use crate::types::{LogFormat, LogRecord};

/// Number of leading non-blank lines inspected by [`detect_format`].
const DETECT_SAMPLE: usize = 5;

/// A parser for one input format.
pub trait LogParser {
    /// Format this parser understands.
    fn format(&self) -> LogFormat;

    /// Parse every line of `path` as served by `source`.
    ///
    /// An empty `Vec` means the input held no valid records; it is not a failure.
    fn parse_source(&self, source: &dyn LogSource, path: &str) -> LogResult<Vec<LogRecord>>;

    /// Parse a file on the local filesystem.
    fn parse(&self, path: &str) -> LogResult<Vec<LogRecord>> {
        self.parse_source(&FileLogSource, path)
    }
}

/// Auto-detect the log format from a sample of lines.
///
/// JSON wins on a strict majority of the first non-blank lines; everything
/// else is treated as pattern text.
pub fn detect_format(lines: &[String]) -> LogFormat {
    let sample: Vec<&str> = lines
        .iter()
        .map(|s| s.as_str())
        .filter(|s| !s.trim().is_empty())
        .take(DETECT_SAMPLE)
        .collect();

    if sample.is_empty() {
        return LogFormat::Pattern;
    }

    let json_count = sample
        .iter()
        .filter(|line| json_lines::looks_like_json(line))
        .count();

    // Majority vote
    if json_count > sample.len() / 2 {
        LogFormat::JsonLines
    } else {
        LogFormat::Pattern
    }
}

/// Detect the format of `path` by sampling its first lines.
pub fn detect_source_format(source: &dyn LogSource, path: &str) -> LogResult<LogFormat> {
    // Blank lines are filtered after reading, so over-read a little.
    let head = source.head_lines(path, DETECT_SAMPLE * 4)?;
    Ok(detect_format(&head))
}
