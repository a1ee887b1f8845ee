//! HTML report generator: a single self-contained page of tables.

use std::fmt::Write;

use lf_core::AnalysisResult;

use crate::error::ReportResult;
use crate::types::{ReportKind, Reporter};
use crate::{HOUR_FORMAT, TIMESTAMP_FORMAT};

const STYLE: &str = "body{font-family:sans-serif;margin:2em;color:#222}\
table{border-collapse:collapse;margin-bottom:1.5em}\
th,td{border:1px solid #ccc;padding:4px 10px;text-align:left}\
th{background:#f0f0f0}td.num{text-align:right}";

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlReporter;

impl Reporter for HtmlReporter {
    fn kind(&self) -> ReportKind {
        ReportKind::Html
    }

    fn render(&self, result: &AnalysisResult) -> ReportResult<String> {
        let mut out = String::new();

        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html lang=\"en\">")?;
        writeln!(out, "<head>")?;
        writeln!(out, "<meta charset=\"utf-8\">")?;
        writeln!(out, "<title>Log Analysis Report</title>")?;
        writeln!(out, "<style>{STYLE}</style>")?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        writeln!(out, "<h1>Log Analysis Report</h1>")?;

        writeln!(out, "<h2>General Statistics</h2>")?;
        writeln!(out, "<ul>")?;
        writeln!(
            out,
            "<li><strong>Total records:</strong> {}</li>",
            result.total_records
        )?;
        writeln!(
            out,
            "<li><strong>Log period:</strong> from <code>{}</code> to <code>{}</code></li>",
            result.log_period.start.format(TIMESTAMP_FORMAT),
            result.log_period.end.format(TIMESTAMP_FORMAT)
        )?;
        writeln!(out, "</ul>")?;

        writeln!(out, "<h2>Records by Level</h2>")?;
        let rows = result
            .level_counts
            .iter()
            .map(|e| (escape(&e.level), e.count));
        write_table(&mut out, "Level", "Count", rows)?;

        writeln!(out, "<h2>Top {} Errors</h2>", result.top_errors.len())?;
        if result.top_errors.is_empty() {
            writeln!(out, "<p>No errors found.</p>")?;
        } else {
            let rows = result
                .top_errors
                .iter()
                .map(|e| (format!("<code>{}</code>", escape(&e.message)), e.count));
            write_table(&mut out, "Error", "Occurrences", rows)?;
        }

        writeln!(out, "<h2>Activity by Hour</h2>")?;
        let rows = result
            .activity_by_hour
            .iter()
            .map(|b| (b.hour.format(HOUR_FORMAT).to_string(), b.count));
        write_table(&mut out, "Hour", "Records", rows)?;

        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;
        Ok(out)
    }
}

/// Two-column table; `rows` labels must already be escaped.
fn write_table(
    out: &mut String,
    label: &str,
    value: &str,
    rows: impl Iterator<Item = (String, usize)>,
) -> std::fmt::Result {
    writeln!(out, "<table>")?;
    writeln!(out, "<tr><th>{label}</th><th>{value}</th></tr>")?;
    for (name, count) in rows {
        writeln!(out, "<tr><td>{name}</td><td class=\"num\">{count}</td></tr>")?;
    }
    writeln!(out, "</table>")
}

/// Escape text for use inside HTML element content or attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
