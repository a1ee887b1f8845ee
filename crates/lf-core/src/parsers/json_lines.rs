//! Newline-delimited JSON (NDJSON) log parser.
//!
//! Each line must be a standalone object with `timestamp`, `level` and
//! `message` keys. Undecodable lines are skipped with a warning; the key
//! schema and timestamps are validated across the whole batch afterwards.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

use crate::error::{LogError, LogResult};
use crate::parsers::LogParser;
use crate::source::LogSource;
use crate::types::{LogFormat, LogRecord};

/// Keys every JSON log must supply somewhere in the file.
pub const REQUIRED_KEYS: [&str; 3] = ["timestamp", "level", "message"];

type JsonObject = Map<String, Value>;

/// Parser for newline-delimited JSON logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLinesParser;

impl LogParser for JsonLinesParser {
    fn format(&self) -> LogFormat {
        LogFormat::JsonLines
    }

    fn parse_source(&self, source: &dyn LogSource, path: &str) -> LogResult<Vec<LogRecord>> {
        let mut objects: Vec<(usize, JsonObject)> = Vec::new();

        for (i, line) in source.lines(path)?.enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match decode_line(&line) {
                Ok(obj) => objects.push((i + 1, obj)),
                Err(e) => {
                    tracing::warn!(line = i + 1, error = %e, "skipping undecodable JSON log line");
                }
            }
        }

        if objects.is_empty() {
            tracing::info!(path, records = 0, "JSON log held no objects");
            return Ok(Vec::new());
        }

        check_schema(objects.iter().map(|(_, obj)| obj))?;

        let mut records = Vec::with_capacity(objects.len());
        for (line_number, obj) in &objects {
            if let Some(record) = assemble(*line_number, obj)? {
                records.push(record);
            }
        }

        tracing::info!(
            path,
            records = records.len(),
            skipped = objects.len() - records.len(),
            "JSON log parsed"
        );
        Ok(records)
    }
}

/// Decode one line as a JSON object. Arrays and scalars are rejected.
pub fn decode_line(line: &str) -> Result<JsonObject, serde_json::Error> {
    serde_json::from_str(line)
}

/// Check if a line looks like JSON.
pub fn looks_like_json(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('{') && trimmed.ends_with('}')
}

/// Fail when a required key never appears in any decoded object.
pub fn check_schema<'a>(objects: impl Iterator<Item = &'a JsonObject> + Clone) -> LogResult<()> {
    let missing: Vec<String> = REQUIRED_KEYS
        .iter()
        .filter(|key| !objects.clone().any(|obj| obj.contains_key(**key)))
        .map(|key| (*key).to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(LogError::Schema { missing })
    }
}

/// Offset-carrying layouts tried after RFC 3339 (colon-less offsets, short forms).
const OFFSET_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y%m%dT%H%M%S%z",
];

/// Layouts without an offset; a trailing `Z` is stripped before these are tried.
const NAIVE_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y%m%dT%H%M%S",
];

/// Build a record from one decoded object.
///
/// A present timestamp that cannot be parsed fails the whole batch, even
/// when the object would otherwise be skipped. Objects with an absent/null
/// field or a non-string level or message are skipped (`Ok(None)`).
fn assemble(line_number: usize, obj: &JsonObject) -> LogResult<Option<LogRecord>> {
    let field = |key: &str| obj.get(key).filter(|v| !v.is_null());

    let timestamp = field("timestamp")
        .map(|ts| {
            ts.as_str()
                .and_then(parse_timestamp)
                .ok_or_else(|| LogError::Parse {
                    line: line_number,
                    message: format!("unparseable timestamp {ts}"),
                })
        })
        .transpose()?;

    let (Some(timestamp), Some(level), Some(message)) =
        (timestamp, field("level"), field("message"))
    else {
        tracing::warn!(line = line_number, "skipping JSON log line with missing fields");
        return Ok(None);
    };

    let (Some(level), Some(message)) = (level.as_str(), message.as_str()) else {
        tracing::warn!(line = line_number, "skipping JSON log line with non-string level or message");
        return Ok(None);
    };

    Ok(Some(LogRecord::new(timestamp, level, message)))
}

/// Parse an ISO-8601 timestamp; values without an offset are taken as UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    // Try RFC 3339 first
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = s.strip_suffix('Z').unwrap_or(s);
    if let Some(ndt) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(naive, fmt).ok())
    {
        return Some(ndt.and_utc());
    }

    // Date only: midnight
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| ndt.and_utc())
}
