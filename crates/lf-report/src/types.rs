//! Report kinds and the `Reporter` trait.

use serde::{Deserialize, Serialize};
use std::path::Path;

use lf_core::AnalysisResult;

use crate::error::{ReportError, ReportResult};

/// Supported report output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    #[default]
    Markdown,
    Html,
    Json,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Html => "html",
            Self::Json => "json",
        }
    }

    /// File extension used for default output names.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Html => "html",
            Self::Json => "json",
        }
    }

    /// Default output file name, e.g. `report.md`.
    pub fn default_output(&self) -> String {
        format!("report.{}", self.extension())
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "markdown" | "md" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            other => Err(ReportError::UnknownKind(other.to_string())),
        }
    }
}

/// Renders an analysis result into one report format.
pub trait Reporter {
    fn kind(&self) -> ReportKind;

    /// Render the full report body.
    fn render(&self, result: &AnalysisResult) -> ReportResult<String>;

    /// Render and write the report to `path`, replacing any existing file.
    fn generate(&self, result: &AnalysisResult, path: &Path) -> ReportResult<()> {
        let body = self.render(result)?;
        std::fs::write(path, body)
            .map_err(|e| ReportError::Io(format!("{}: {e}", path.display())))?;
        tracing::info!(kind = %self.kind(), path = %path.display(), "report written");
        Ok(())
    }
}
