//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::config::{ColorMode, Config, ConfigFile};
use crate::error::ConfigError;

use std::path::Path;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file, or from the default locations
    pub fn with_file(mut self, path: Option<&Path>) -> Result<Self, ConfigError> {
        let file_config = match path {
            Some(path) => Some(ConfigFile::load(path)?),
            None => ConfigFile::load_default()?,
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        Ok(self)
    }

    /// Override with CLI/env API key
    pub fn with_api_key(mut self, key: Option<String>) -> Self {
        if let Some(k) = key {
            self.config.api.key = Some(k);
        }
        self
    }

    /// Override with CLI colour mode
    pub fn with_color(mut self, color: Option<ColorMode>) -> Self {
        if let Some(c) = color {
            self.config.output.color = c;
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
