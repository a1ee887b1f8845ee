//! Fixed-pattern text log parser: `YYYY-MM-DD HH:MM:SS - LEVEL - message`.

use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;

use crate::error::LogResult;
use crate::parsers::LogParser;
use crate::source::LogSource;
use crate::types::{LogFormat, LogRecord};

/// Timestamp layout used by pattern lines.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

static RE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<timestamp>\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}) - (?P<level>\w+) - (?P<message>.*)$",
    )
    .unwrap()
});

/// Parser for pattern-format text logs.
///
/// Lines that do not match (stack traces, banners, wrapped output) are
/// skipped silently.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternParser;

/// Parse a single pattern line into a record.
///
/// Returns `None` when the line does not match the grammar or its
/// timestamp is not a real calendar time.
pub fn parse_line(line: &str) -> Option<LogRecord> {
    let caps = RE_LINE.captures(line)?;
    let timestamp = NaiveDateTime::parse_from_str(&caps["timestamp"], TIMESTAMP_FORMAT)
        .ok()?
        .and_utc();
    Some(LogRecord::new(timestamp, &caps["level"], &caps["message"]))
}

impl LogParser for PatternParser {
    fn format(&self) -> LogFormat {
        LogFormat::Pattern
    }

    fn parse_source(&self, source: &dyn LogSource, path: &str) -> LogResult<Vec<LogRecord>> {
        let mut records = Vec::new();
        let mut skipped = 0usize;

        for (i, line) in source.lines(path)?.enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(&line) {
                Some(record) => records.push(record),
                None => {
                    skipped += 1;
                    tracing::debug!(line = i + 1, "line does not match log pattern, skipped");
                }
            }
        }

        tracing::info!(path, records = records.len(), skipped, "pattern log parsed");
        Ok(records)
    }
}
