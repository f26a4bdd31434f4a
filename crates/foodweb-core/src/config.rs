//! Configuration for the console front end.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

/// How reports are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented, human-readable listing
    Text,
    /// One JSON object per report
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    /// Parse a format name, case-insensitively
    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Parse(format!("unknown output format {:?}", other))),
        }
    }
}

/// Console configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Report output format
    pub output: OutputFormat,
    /// Print interactive prompts and banners
    pub prompts: bool,
    /// Log filter used when RUST_LOG is unset
    pub log_filter: String,
    /// Emit log events as JSON lines on stderr
    pub log_json: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            prompts: true,
            log_filter: "warn,foodweb_cli=info".to_string(),
            log_json: false,
        }
    }
}

impl CliConfig {
    /// Defaults overlaid with the FOODWEB_* environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("FOODWEB_OUTPUT") {
            match value.parse() {
                Ok(format) => config.output = format,
                Err(e) => warn!("Ignoring FOODWEB_OUTPUT: {}", e),
            }
        }

        if let Some(value) = lookup("FOODWEB_PROMPTS") {
            config.prompts = is_truthy(&value);
        }

        if let Some(value) = lookup("FOODWEB_LOG_JSON") {
            config.log_json = is_truthy(&value);
        }

        if let Some(value) = lookup("FOODWEB_LOG") {
            config.log_filter = value;
        }

        config
    }
}

fn is_truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}
