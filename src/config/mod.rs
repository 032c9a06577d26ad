//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

/// Default API root
pub const DEFAULT_API_URL: &str = "https://atlas.ripe.net/api/v2";
/// Default web site root, used for measurement URLs
pub const DEFAULT_WEB_URL: &str = "https://atlas.ripe.net";
/// Default number of records fetched per search
pub const DEFAULT_LIMIT: usize = 25;
/// Largest number of records a single search may fetch
pub const MAX_LIMIT: usize = 1000;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// API connection settings
    pub api: ApiConfig,
    /// Output settings
    pub output: OutputConfig,
}

/// API connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API root URL
    pub base_url: String,
    /// Web site root URL
    pub web_url: String,
    /// API key sent as `Authorization: Key ...`
    pub key: Option<String>,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            web_url: DEFAULT_WEB_URL.to_string(),
            key: None,
            timeout_seconds: 30,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default number of records per search
    pub limit: usize,
    /// When to colorize status cells
    pub color: ColorMode,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            color: ColorMode::Auto,
        }
    }
}

/// When to emit ANSI colours
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colour when stdout is a terminal
    #[default]
    Auto,
    /// Always colour
    Always,
    /// Never colour
    Never,
}

impl ColorMode {
    /// Resolve against the current stdout
    pub fn enabled(&self) -> bool {
        match self {
            ColorMode::Auto => std::io::stdout().is_terminal(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl Config {
    /// Check values that serde cannot
    pub fn validate(&self) -> Result<(), crate::error::ConfigError> {
        if self.output.limit == 0 || self.output.limit > MAX_LIMIT {
            return Err(crate::error::ConfigError::InvalidValue {
                key: "output.limit".to_string(),
                message: format!("must be between 1 and {}", MAX_LIMIT),
            });
        }
        if self.api.timeout_seconds == 0 {
            return Err(crate::error::ConfigError::InvalidValue {
                key: "api.timeout_seconds".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
