//! JSON report generator: the analysis result, pretty-printed.

use lf_core::AnalysisResult;

use crate::error::ReportResult;
use crate::types::{ReportKind, Reporter};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn kind(&self) -> ReportKind {
        ReportKind::Json
    }

    fn render(&self, result: &AnalysisResult) -> ReportResult<String> {
        let mut body = serde_json::to_string_pretty(result)?;
        body.push('\n');
        Ok(body)
    }
}
