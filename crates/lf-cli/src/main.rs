//! LogFlow: parse a log file, analyze it, and write a report.

use clap::Parser;

use lf_cli::args::Args;
use lf_cli::config::LogflowConfig;
use lf_cli::logging;
use lf_cli::pipeline::{self, Outcome, RunOptions};
use lf_core::{FileLogSource, ParserRegistry};
use lf_report::ReporterRegistry;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // ── Load config ─────────────────────────────────────────────
    let config = LogflowConfig::load(args.config.as_deref())?;
    logging::init(&config.log_level, config.log_json);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logflow starting");

    let options = RunOptions::resolve(&args, &config)?;

    // ── Build registries ────────────────────────────────────────
    let parsers = ParserRegistry::with_defaults();
    let reporters = ReporterRegistry::with_defaults();

    match pipeline::run(&options, &FileLogSource, &parsers, &reporters)? {
        Outcome::NoData => {
            tracing::warn!(path = %options.logfile, "no log records found, report not generated");
        }
        Outcome::Written { path, records } => {
            tracing::info!(records, path = %path.display(), "report generated");
        }
    }

    Ok(())
}
