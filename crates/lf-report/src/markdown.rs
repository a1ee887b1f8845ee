//! Markdown report generator.

use std::fmt::Write;

use lf_core::AnalysisResult;

use crate::error::ReportResult;
use crate::types::{ReportKind, Reporter};
use crate::{HOUR_FORMAT, TIMESTAMP_FORMAT};

/// Renders a Markdown document with one table per aggregation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownReporter;

impl Reporter for MarkdownReporter {
    fn kind(&self) -> ReportKind {
        ReportKind::Markdown
    }

    fn render(&self, result: &AnalysisResult) -> ReportResult<String> {
        let mut out = String::new();

        writeln!(out, "# Log Analysis Report")?;
        writeln!(out)?;

        writeln!(out, "## General Statistics")?;
        writeln!(out, "- **Total records:** {}", result.total_records)?;
        writeln!(
            out,
            "- **Log period:** from `{}` to `{}`",
            result.log_period.start.format(TIMESTAMP_FORMAT),
            result.log_period.end.format(TIMESTAMP_FORMAT)
        )?;
        writeln!(out)?;

        writeln!(out, "## Records by Level")?;
        writeln!(out, "| Level | Count |")?;
        writeln!(out, "|-------|-------|")?;
        for entry in &result.level_counts {
            writeln!(out, "| {} | {} |", escape_cell(&entry.level), entry.count)?;
        }
        writeln!(out)?;

        writeln!(out, "## Top {} Errors", result.top_errors.len())?;
        if result.top_errors.is_empty() {
            writeln!(out, "No errors found.")?;
        } else {
            writeln!(out, "| Error | Occurrences |")?;
            writeln!(out, "|-------|-------------|")?;
            for entry in &result.top_errors {
                writeln!(out, "| {} | {} |", code_span(&entry.message), entry.count)?;
            }
        }
        writeln!(out)?;

        writeln!(out, "## Activity by Hour")?;
        writeln!(out, "| Hour | Records |")?;
        writeln!(out, "|------|---------|")?;
        for bucket in &result.activity_by_hour {
            writeln!(out, "| {} | {} |", bucket.hour.format(HOUR_FORMAT), bucket.count)?;
        }

        Ok(out)
    }
}

/// Keep a value inside a single table cell.
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|").replace(['\r', '\n'], " ")
}

/// Wrap a cell value in a code span without altering its text.
///
/// The fence is one backtick longer than the longest backtick run inside
/// the value; a fenced value is space-padded so edge backticks stay literal.
fn code_span(value: &str) -> String {
    let longest_run = value
        .split(|c: char| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest_run + 1);
    let pad = if longest_run > 0 { " " } else { "" };
    format!("{fence}{pad}{}{pad}{fence}", escape_cell(value))
}
