//! Configuration management
//!
//! Settings for the `constrain` CLI: which entry point runs, where
//! declarations and the catalog live, and how results are printed.
//! See [`crate::paths`] for the lookup order.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::paths;

/// constrain configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Check behavior
    #[serde(default)]
    pub check: CheckConfig,
    /// Input locations
    #[serde(default)]
    pub paths: PathsConfig,
    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

/// Which entry point `constrain check` uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckMode {
    /// Pre-execution validation: stop at the first failure, missing targets are fatal
    #[default]
    Strict,
    /// Boolean verdict over every constraint
    Legacy,
}

impl std::fmt::Display for CheckMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Legacy => write!(f, "legacy"),
        }
    }
}

impl std::str::FromStr for CheckMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "legacy" => Ok(Self::Legacy),
            _ => Err(format!("Invalid check mode: {s}. Use: strict, legacy")),
        }
    }
}

/// Check behavior
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct CheckConfig {
    /// Entry point used by `constrain check`
    #[serde(default)]
    pub mode: CheckMode,
}

/// Input locations
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PathsConfig {
    /// Files, directories or globs holding declarations
    #[serde(default = "default_constraints")]
    pub constraints: Vec<String>,
    /// Default catalog file
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

fn default_constraints() -> Vec<String> {
    vec![paths::DEFAULT_CONSTRAINTS_GLOB.to_string()]
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            constraints: default_constraints(),
            catalog: None,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Human,
    /// JSON
    Json,
}

/// Output preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,
    /// Colorize human output
    #[serde(default = "default_color")]
    pub color: bool,
}

const fn default_color() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Parse a config from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid config.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a specific config file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Load the first config found for a project root, or defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed.
    pub fn load(root: &Path) -> anyhow::Result<Self> {
        for candidate in paths::config_candidates(root) {
            if candidate.is_file() {
                log::debug!("using config {}", candidate.display());
                return Self::load_from(&candidate);
            }
        }
        Ok(Self::default())
    }
}
