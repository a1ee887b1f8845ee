//! Canonical log record model and the analysis result contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LogError;

// ── Log Format ────────────────────────────────────────────────

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// `YYYY-MM-DD HH:MM:SS - LEVEL - message` text lines.
    Pattern,
    /// Newline-delimited JSON objects with `timestamp`, `level`, `message`.
    JsonLines,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pattern => "pattern",
            Self::JsonLines => "json_lines",
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LogFormat {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regex" | "pattern" => Ok(Self::Pattern),
            "json" | "json_lines" => Ok(Self::JsonLines),
            other => Err(LogError::Format(format!("unknown format: {other}"))),
        }
    }
}

// ── Log Record ────────────────────────────────────────────────

/// A canonical log record, normalized from any supported format.
///
/// Only valid records exist: parsers drop lines whose timestamp is
/// missing or unparseable before constructing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    /// Level token, kept verbatim (no case folding).
    pub level: String,
    /// Free-form message body; may be empty.
    pub message: String,
}

impl LogRecord {
    pub fn new(
        timestamp: DateTime<Utc>,
        level: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            level: level.into(),
            message: message.into(),
        }
    }
}

// ── Analysis Result ───────────────────────────────────────────

/// Earliest and latest timestamps in a record collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogPeriod {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Occurrences of one level value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCount {
    pub level: String,
    pub count: usize,
}

/// Occurrences of one distinct ERROR message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCount {
    pub message: String,
    pub count: usize,
}

/// Records falling inside one clock hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyActivity {
    /// Start of the hour (minutes and seconds truncated).
    pub hour: DateTime<Utc>,
    pub count: usize,
}

/// Aggregate statistics over one record collection.
///
/// This is the only structure report generators consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub total_records: usize,
    pub log_period: LogPeriod,
    /// Descending by count, ties in first-seen order.
    pub level_counts: Vec<LevelCount>,
    /// Descending by count, at most `top_n` entries.
    pub top_errors: Vec<ErrorCount>,
    /// Chronological and gap-filled: one entry per hour from first to last.
    pub activity_by_hour: Vec<HourlyActivity>,
}
