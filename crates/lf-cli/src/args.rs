//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Parse a log file and generate an analysis report.
#[derive(Parser, Debug, Clone)]
#[command(name = "logflow", version, about)]
pub struct Args {
    /// Path to the log file to analyze
    pub logfile: String,

    /// Parser to use: regex, json or auto (default: config value, else auto)
    #[arg(long)]
    pub parser: Option<String>,

    /// Report format: markdown, html or json (default: config value, else markdown)
    #[arg(long)]
    pub report: Option<String>,

    /// Output file (default: report.<ext>)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Number of most frequent errors to include
    #[arg(long)]
    pub top_errors: Option<usize>,

    /// Path to a TOML config file (default: ./logflow.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_args() {
        let args = Args::try_parse_from(["logflow", "app.log"]).unwrap();
        assert_eq!(args.logfile, "app.log");
        assert!(args.parser.is_none());
        assert!(args.top_errors.is_none());
    }

    #[test]
    fn parse_full_args() {
        let args = Args::try_parse_from([
            "logflow",
            "app.json",
            "--parser",
            "json",
            "--report",
            "html",
            "--output",
            "out.html",
            "--top-errors",
            "3",
            "--config",
            "custom.toml",
        ])
        .unwrap();
        assert_eq!(args.parser.as_deref(), Some("json"));
        assert_eq!(args.report.as_deref(), Some("html"));
        assert_eq!(args.output, Some(PathBuf::from("out.html")));
        assert_eq!(args.top_errors, Some(3));
        assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn logfile_is_required() {
        assert!(Args::try_parse_from(["logflow"]).is_err());
    }
}
