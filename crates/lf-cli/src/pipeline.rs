//! Parse → analyze → report pipeline.

use std::path::PathBuf;

use lf_core::parsers::detect_source_format;
use lf_core::{Analyzer, LogFormat, LogSource, ParserRegistry};
use lf_report::{ReportKind, ReporterRegistry};

use crate::args::Args;
use crate::config::LogflowConfig;

/// Parser id meaning "sniff the file".
pub const AUTO_PARSER: &str = "auto";

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub logfile: String,
    /// None means auto-detect from the first lines.
    pub parser: Option<LogFormat>,
    pub report: ReportKind,
    pub output: PathBuf,
    pub top_errors: usize,
}

impl RunOptions {
    /// Merge command-line flags over config values.
    pub fn resolve(args: &Args, config: &LogflowConfig) -> anyhow::Result<Self> {
        let parser = match args.parser.as_deref().or(config.parser.as_deref()) {
            None | Some(AUTO_PARSER) => None,
            Some(id) => Some(id.parse::<LogFormat>()?),
        };
        let report = args
            .report
            .as_deref()
            .or(config.report.as_deref())
            .map(str::parse::<ReportKind>)
            .transpose()?
            .unwrap_or_default();
        let output = args
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(report.default_output()));

        Ok(Self {
            logfile: args.logfile.clone(),
            parser,
            report,
            output,
            top_errors: args.top_errors.unwrap_or(config.top_errors),
        })
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The log held no valid records; no report was written.
    NoData,
    /// A report covering `records` entries was written to `path`.
    Written { path: PathBuf, records: usize },
}

/// Run the whole pipeline for one log file.
pub fn run(
    options: &RunOptions,
    source: &dyn LogSource,
    parsers: &ParserRegistry,
    reporters: &ReporterRegistry,
) -> anyhow::Result<Outcome> {
    let format = match options.parser {
        Some(format) => format,
        None => {
            let detected = detect_source_format(source, &options.logfile)?;
            tracing::info!(format = %detected, "log format auto-detected");
            detected
        }
    };

    tracing::info!(path = %options.logfile, format = %format, "parsing log file");
    let records = parsers.get(format)?.parse_source(source, &options.logfile)?;
    if records.is_empty() {
        return Ok(Outcome::NoData);
    }
    tracing::info!(records = records.len(), "log file parsed");

    let result = Analyzer::new(&records)?.analyze(options.top_errors)?;
    tracing::info!(
        total = result.total_records,
        hours = result.activity_by_hour.len(),
        "analysis complete"
    );

    reporters
        .get(options.report)?
        .generate(&result, &options.output)?;

    Ok(Outcome::Written {
        path: options.output.clone(),
        records: result.total_records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use lf_core::{LogError, MockLogSource};

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["logflow", "/var/log/app.log"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    fn options(logfile: &str, output: PathBuf) -> RunOptions {
        RunOptions {
            logfile: logfile.to_string(),
            parser: None,
            report: ReportKind::Markdown,
            output,
            top_errors: 5,
        }
    }

    #[test]
    fn resolve_defaults() {
        let opts = RunOptions::resolve(&args(&[]), &LogflowConfig::default()).unwrap();
        assert_eq!(opts.parser, None);
        assert_eq!(opts.report, ReportKind::Markdown);
        assert_eq!(opts.output, PathBuf::from("report.md"));
        assert_eq!(opts.top_errors, 5);
    }

    #[test]
    fn resolve_flags_override_config() {
        let config = LogflowConfig {
            top_errors: 9,
            report: Some("json".into()),
            parser: Some("json".into()),
            ..LogflowConfig::default()
        };
        let opts = RunOptions::resolve(
            &args(&["--parser", "regex", "--report", "html", "--top-errors", "2"]),
            &config,
        )
        .unwrap();
        assert_eq!(opts.parser, Some(LogFormat::Pattern));
        assert_eq!(opts.report, ReportKind::Html);
        assert_eq!(opts.output, PathBuf::from("report.html"));
        assert_eq!(opts.top_errors, 2);
    }

    #[test]
    fn resolve_uses_config_values() {
        let config = LogflowConfig {
            top_errors: 9,
            report: Some("json".into()),
            parser: Some("json".into()),
            ..LogflowConfig::default()
        };
        let opts = RunOptions::resolve(&args(&[]), &config).unwrap();
        assert_eq!(opts.parser, Some(LogFormat::JsonLines));
        assert_eq!(opts.report, ReportKind::Json);
        assert_eq!(opts.top_errors, 9);
    }

    #[test]
    fn resolve_auto_parser() {
        let config = LogflowConfig {
            parser: Some("json".into()),
            ..LogflowConfig::default()
        };
        let opts = RunOptions::resolve(&args(&["--parser", "auto"]), &config).unwrap();
        assert_eq!(opts.parser, None);
    }

    #[test]
    fn resolve_rejects_unknown_ids() {
        let config = LogflowConfig::default();
        assert!(RunOptions::resolve(&args(&["--parser", "syslog"]), &config).is_err());
        assert!(RunOptions::resolve(&args(&["--report", "pdf"]), &config).is_err());
    }

    #[test]
    fn run_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.md");
        let source = MockLogSource::with_pattern_sample();

        let outcome = run(
            &options("/var/log/app.log", output.clone()),
            &source,
            &ParserRegistry::with_defaults(),
            &ReporterRegistry::with_defaults(),
        )
        .unwrap();

        assert_eq!(
            outcome,
            Outcome::Written {
                path: output.clone(),
                records: 7
            }
        );
        let report = std::fs::read_to_string(&output).unwrap();
        assert!(report.contains("| `Failed to connect to database` | 2 |"));
    }

    #[test]
    fn run_auto_detects_json() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.json");
        let source = MockLogSource::with_json_sample();
        let mut opts = options("/var/log/app.json", output.clone());
        opts.report = ReportKind::Json;

        let outcome = run(
            &opts,
            &source,
            &ParserRegistry::with_defaults(),
            &ReporterRegistry::with_defaults(),
        )
        .unwrap();
        assert!(matches!(outcome, Outcome::Written { records: 5, .. }));
    }

    #[test]
    fn run_without_records_is_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.md");
        let mut source = MockLogSource::new();
        source.add_file("/noise.log", vec!["no pattern here".into()]);

        let outcome = run(
            &options("/noise.log", output.clone()),
            &source,
            &ParserRegistry::with_defaults(),
            &ReporterRegistry::with_defaults(),
        )
        .unwrap();
        assert_eq!(outcome, Outcome::NoData);
        assert!(!output.exists());
    }

    #[test]
    fn run_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(
            &options("/missing.log", dir.path().join("report.md")),
            &MockLogSource::new(),
            &ParserRegistry::with_defaults(),
            &ReporterRegistry::with_defaults(),
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LogError>(),
            Some(LogError::NotFound(_))
        ));
    }
}
