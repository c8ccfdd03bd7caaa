//! Viewer configuration parser
//!
//! Parses the optional `logview.toml` into display settings. Every key has a
//! default, so an empty file is a valid configuration.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::display::{is_valid_time_format, DEFAULT_TIME_FORMAT};

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

/// Top-level viewer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewerConfig {
    /// Substitute `:name` placeholders in list output by default
    #[serde(default = "default_placeholders")]
    pub placeholders: bool,
    /// strftime layout for timestamps
    #[serde(default = "default_time_format")]
    pub time_format: String,
    /// Color policy
    #[serde(default)]
    pub color: ColorMode,
}

const fn default_placeholders() -> bool {
    true
}

fn default_time_format() -> String {
    DEFAULT_TIME_FORMAT.to_string()
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            placeholders: default_placeholders(),
            time_format: default_time_format(),
            color: ColorMode::default(),
        }
    }
}

impl ViewerConfig {
    /// Parse a config file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse config content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse logview.toml")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.time_format.trim().is_empty() {
            bail!("time_format cannot be empty");
        }
        if !is_valid_time_format(&self.time_format) {
            bail!("Invalid time_format '{}'", self.time_format);
        }
        Ok(())
    }
}
