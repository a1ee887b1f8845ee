//! Report generators for LogFlow.
//!
//! Each generator renders an [`lf_core::AnalysisResult`] into one output
//! format. Generators see nothing but that structure.

pub mod error;
pub mod html;
pub mod json;
pub mod markdown;
pub mod registry;
pub mod types;

pub use error::{ReportError, ReportResult};
pub use html::HtmlReporter;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use registry::ReporterRegistry;
pub use types::{ReportKind, Reporter};

/// Timestamp layout shared by the text reports.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Hour-bucket layout shared by the text reports.
pub(crate) const HOUR_FORMAT: &str = "%Y-%m-%d %H:00";
