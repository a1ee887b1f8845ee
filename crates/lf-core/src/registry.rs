//! Parser registry keyed by log format.
//!
//! Built once at startup and handed to whoever dispatches by format id,
//! instead of a process-wide lookup table.

use std::collections::HashMap;

use crate::error::{LogError, LogResult};
use crate::parsers::{JsonLinesParser, LogParser, PatternParser};
use crate::types::LogFormat;

/// Maps each supported [`LogFormat`] to the parser that reads it.
pub struct ParserRegistry {
    parsers: HashMap<LogFormat, Box<dyn LogParser>>,
}

impl ParserRegistry {
    /// Build a registry from a parser collection. Later entries win on duplicate formats.
    pub fn new(parsers: Vec<Box<dyn LogParser>>) -> Self {
        let parsers = parsers.into_iter().map(|p| (p.format(), p)).collect();
        Self { parsers }
    }

    /// Build with every built-in parser.
    pub fn with_defaults() -> Self {
        Self::new(vec![Box::new(PatternParser), Box::new(JsonLinesParser)])
    }

    /// Look up the parser for a format.
    pub fn get(&self, format: LogFormat) -> LogResult<&dyn LogParser> {
        self.parsers
            .get(&format)
            .map(|p| p.as_ref())
            .ok_or_else(|| LogError::Format(format!("no parser registered for {format}")))
    }

    /// Total number of registered parsers.
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}
