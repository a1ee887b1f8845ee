//! Reporter registry keyed by report kind.

use std::collections::HashMap;

use crate::error::{ReportError, ReportResult};
use crate::html::HtmlReporter;
use crate::json::JsonReporter;
use crate::markdown::MarkdownReporter;
use crate::types::{ReportKind, Reporter};

/// Maps each [`ReportKind`] to its generator. Built once at startup.
pub struct ReporterRegistry {
    reporters: HashMap<ReportKind, Box<dyn Reporter>>,
}

impl ReporterRegistry {
    pub fn new(reporters: Vec<Box<dyn Reporter>>) -> Self {
        let reporters = reporters.into_iter().map(|r| (r.kind(), r)).collect();
        Self { reporters }
    }

    /// Build with every built-in reporter.
    pub fn with_defaults() -> Self {
        Self::new(vec![
            Box::new(MarkdownReporter),
            Box::new(HtmlReporter),
            Box::new(JsonReporter),
        ])
    }

    pub fn get(&self, kind: ReportKind) -> ReportResult<&dyn Reporter> {
        self.reporters
            .get(&kind)
            .map(|r| r.as_ref())
            .ok_or_else(|| ReportError::UnknownKind(kind.to_string()))
    }

    pub fn len(&self) -> usize {
        self.reporters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reporters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_with_defaults() {
        let reg = ReporterRegistry::with_defaults();
        assert_eq!(reg.len(), 3);
        for kind in [ReportKind::Markdown, ReportKind::Html, ReportKind::Json] {
            assert_eq!(reg.get(kind).unwrap().kind(), kind);
        }
    }

    #[test]
    fn missing_kind_is_error() {
        let reg = ReporterRegistry::new(vec![Box::new(JsonReporter)]);
        assert!(matches!(
            reg.get(ReportKind::Html),
            Err(ReportError::UnknownKind(_))
        ));
        assert!(!reg.is_empty());
    }
}
