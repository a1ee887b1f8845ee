//! Shared test harness for E2E integration tests.
//!
//! Writes log fixtures to a temporary directory so every test runs against
//! real files through `FileLogSource`.

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

use lf_cli::pipeline::{Outcome, RunOptions};
use lf_core::{FileLogSource, LogFormat, ParserRegistry};
use lf_report::{ReportKind, ReporterRegistry};

/// Lines from the disk-full walkthrough: two errors at 10:xx, one info at 11:00.
pub const DISK_FULL_LOG: &str = "2024-01-01 10:00:00 - ERROR - disk full\n\
2024-01-01 10:05:00 - ERROR - disk full\n\
2024-01-01 11:00:00 - INFO - ok\n";

/// A temp directory holding log inputs and report outputs.
pub struct TestHarness {
    pub dir: TempDir,
    pub parsers: ParserRegistry,
    pub reporters: ReporterRegistry,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            parsers: ParserRegistry::with_defaults(),
            reporters: ReporterRegistry::with_defaults(),
        }
    }

    /// Write `contents` to `name` inside the harness directory.
    pub fn write_log(&self, name: &str, contents: &str) -> String {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path.to_str().unwrap().to_string()
    }

    /// Write JSON lines, one per element.
    pub fn write_json_log(&self, name: &str, lines: &[&str]) -> String {
        self.write_log(name, &(lines.join("\n") + "\n"))
    }

    pub fn output_path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Run the full CLI pipeline against files on disk.
    pub fn run(
        &self,
        logfile: &str,
        parser: Option<LogFormat>,
        report: ReportKind,
        top_errors: usize,
    ) -> anyhow::Result<(Outcome, PathBuf)> {
        let output = self.output_path(&report.default_output());
        let options = RunOptions {
            logfile: logfile.to_string(),
            parser,
            report,
            output: output.clone(),
            top_errors,
        };
        let outcome =
            lf_cli::pipeline::run(&options, &FileLogSource, &self.parsers, &self.reporters)?;
        Ok((outcome, output))
    }
}
