//! LogFlow configuration, loadable from TOML.

use serde::Deserialize;
use std::path::Path;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "logflow.toml";

/// Defaults applied when the command line leaves a setting out.
#[derive(Debug, Clone, Deserialize)]
pub struct LogflowConfig {
    /// Number of most frequent errors to report.
    #[serde(default = "default_top_errors")]
    pub top_errors: usize,
    /// Report format id (`markdown`, `html`, `json`).
    #[serde(default)]
    pub report: Option<String>,
    /// Parser id (`regex`, `json`, `auto`). None means auto-detect.
    #[serde(default)]
    pub parser: Option<String>,
    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit log lines as JSON.
    #[serde(default)]
    pub log_json: bool,
}

fn default_top_errors() -> usize {
    lf_core::DEFAULT_TOP_ERRORS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogflowConfig {
    fn default() -> Self {
        Self {
            top_errors: default_top_errors(),
            report: None,
            parser: None,
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl LogflowConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load an explicit config file, else `logflow.toml` if present, else defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Self::default()),
        }
    }
}
