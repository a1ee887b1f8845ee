//! Log source abstraction: read log lines from files, mocks, or other backends.

use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::error::{LogError, LogResult};

/// Lazily produced lines of one source; each item may fail independently.
pub type LineIter<'a> = Box<dyn Iterator<Item = LogResult<String>> + 'a>;

/// Abstraction for reading log lines from various sources.
///
/// Parsers only see lines through this trait, so tests can feed them
/// in-memory content via [`crate::MockLogSource`].
pub trait LogSource {
    /// Open `path` and stream its lines without trailing newlines.
    fn lines(&self, path: &str) -> LogResult<LineIter<'_>>;

    /// Read at most `count` lines from the start of `path`.
    fn head_lines(&self, path: &str, count: usize) -> LogResult<Vec<String>> {
        self.lines(path)?.take(count).collect()
    }
}

/// Reads logs from the local filesystem, one buffered line at a time.
pub struct FileLogSource;

impl LogSource for FileLogSource {
    fn lines(&self, path: &str) -> LogResult<LineIter<'_>> {
        let file = File::open(path).map_err(|e| LogError::from_io(path, e))?;
        let path = path.to_string();
        Ok(Box::new(
            BufReader::new(file)
                .lines()
                .map(move |line| line.map_err(|e| LogError::from_io(&path, e))),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_source_streams_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "first\r\nsecond\nthird").unwrap();
        let path = file.path().to_str().unwrap();

        let lines: Vec<String> = FileLogSource
            .lines(path)
            .unwrap()
            .collect::<LogResult<_>>()
            .unwrap();
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn file_source_missing_file() {
        let result = FileLogSource.lines("/nonexistent/logflow/app.log");
        assert!(matches!(result, Err(LogError::NotFound(_))));
    }

    #[test]
    fn file_source_invalid_utf8_is_io_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"ok line\n\xff\xfe broken\n").unwrap();
        let path = file.path().to_str().unwrap();

        let result: LogResult<Vec<String>> = FileLogSource.lines(path).unwrap().collect();
        assert!(matches!(result, Err(LogError::Io(_))));
    }

    #[test]
    fn head_lines_limits_count() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "a\nb\nc\nd").unwrap();
        let path = file.path().to_str().unwrap();

        let head = FileLogSource.head_lines(path, 2).unwrap();
        assert_eq!(head, vec!["a", "b"]);
    }
}
