use anyhow::Context;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "otcheck.config.json";

/// How command results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// otcheck configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Suite file run by `otcheck suite` when no file is given
    #[serde(default = "default_suite_file")]
    pub suite_file: String,

    /// Output format when `--format` is not passed
    #[serde(default)]
    pub format: OutputFormat,

    /// Log filter used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Stop a suite run at the first failing case
    #[serde(default)]
    pub fail_fast: bool,
}

fn default_suite_file() -> String {
    "otcheck.suite.json".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Invalid config in {}", config_path.display()))?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to the configured suite file
    pub fn get_suite_path(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.suite_file)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            suite_file: default_suite_file(),
            format: OutputFormat::default(),
            log_level: default_log_level(),
            fail_fast: false,
        }
    }
}
