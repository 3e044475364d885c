use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level weeks configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct WeeksConfig {
    /// Navigator settings.
    #[serde(default)]
    pub navigator: NavigatorToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavigatorToml {
    #[serde(default = "default_start")]
    pub start: String,
    #[serde(default = "default_start_match")]
    pub start_match: String,
}

impl Default for NavigatorToml {
    fn default() -> Self {
        Self {
            start: default_start(),
            start_match: default_start_match(),
        }
    }
}

fn default_start() -> String {
    "today".to_string()
}
fn default_start_match() -> String {
    "full-date".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

impl WeeksConfig {
    /// Loads the config file at `path`, falling back to defaults if it does
    /// not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}
