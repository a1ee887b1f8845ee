//! Mock log source for testing: serves pre-loaded log content.

use std::collections::HashMap;

use crate::error::{LogError, LogResult};
use crate::source::{LineIter, LogSource};

/// A mock log source that serves pre-loaded content by path.
pub struct MockLogSource {
    files: HashMap<String, Vec<String>>,
}

impl MockLogSource {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    /// Add a file with the given lines.
    pub fn add_file(&mut self, path: impl Into<String>, lines: Vec<String>) {
        self.files.insert(path.into(), lines);
    }

    /// Create a mock with a sample pattern-format file at `/var/log/app.log`.
    ///
    /// Includes an interleaved stack trace that the pattern parser must skip.
    pub fn with_pattern_sample() -> Self {
        let mut m = Self::new();
        m.add_file(
            "/var/log/app.log",
            vec![
                "2024-01-15 09:58:01 - INFO - Service started".into(),
                "2024-01-15 10:00:05 - ERROR - Failed to connect to database".into(),
                "Traceback (most recent call last):".into(),
                "  File \"app.py\", line 42, in connect".into(),
                "2024-01-15 10:00:10 - WARN - Retrying connection in 5 seconds".into(),
                "2024-01-15 10:00:15 - ERROR - Failed to connect to database".into(),
                "2024-01-15 10:30:00 - DEBUG - Heartbeat sent".into(),
                "".into(),
                "2024-01-15 12:15:42 - ERROR - Disk usage at 95%".into(),
                "2024-01-15 12:16:00 - INFO - Database connection established".into(),
            ],
        );
        m
    }

    /// Create a mock with a sample JSON lines file at `/var/log/app.json`.
    pub fn with_json_sample() -> Self {
        let mut m = Self::new();
        m.add_file(
            "/var/log/app.json",
            vec![
                r#"{"timestamp":"2024-01-15T12:00:01Z","level":"INFO","message":"Service started","service":"api"}"#.into(),
                r#"{"timestamp":"2024-01-15T12:00:05Z","level":"ERROR","message":"Connection refused: broker","retry":3}"#.into(),
                r#"{"timestamp":"2024-01-15T12:20:10Z","level":"WARN","message":"Memory usage high: 82%"}"#.into(),
                "{not valid json".into(),
                r#"{"timestamp":"2024-01-15T13:05:15Z","level":"ERROR","message":"Connection refused: broker"}"#.into(),
                r#"{"timestamp":"2024-01-15T13:45:20","level":"INFO","message":"Heartbeat sent"}"#.into(),
            ],
        );
        m
    }
}

impl Default for MockLogSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSource for MockLogSource {
    fn lines(&self, path: &str) -> LogResult<LineIter<'_>> {
        let lines = self
            .files
            .get(path)
            .ok_or_else(|| LogError::NotFound(path.to_string()))?;
        Ok(Box::new(lines.iter().cloned().map(Ok::<String, LogError>)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_streams_lines() {
        let source = MockLogSource::with_pattern_sample();
        let lines: Vec<String> = source
            .lines("/var/log/app.log")
            .unwrap()
            .collect::<LogResult<_>>()
            .unwrap();
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn mock_head_lines() {
        let source = MockLogSource::with_json_sample();
        let lines = source.head_lines("/var/log/app.json", 2).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("Connection refused"));
    }

    #[test]
    fn mock_not_found() {
        let source = MockLogSource::new();
        assert!(matches!(
            source.lines("/nonexistent"),
            Err(LogError::NotFound(_))
        ));
    }
}
