use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::diff::{DiffConfig, GranularityMode, ViewMode};
use crate::errors::ConfigError;

/// Application configuration module
/// This module handles loading and saving the configuration file that
/// provides the default comparison options for the command line tool.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Comparison options
    #[serde(default)]
    pub diff: DiffConfig,

    /// Explicit diff granularity; derived from `diff.break_sentences` when absent
    #[serde(default)]
    pub granularity: Option<GranularityMode>,

    /// Layout of the comparison result
    #[serde(default)]
    pub view: ViewMode,

    /// Use ANSI colors in the output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Print the list of changes before the result
    #[serde(default = "default_true")]
    pub show_summary: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Default configuration file name
pub fn default_config_path() -> &'static str {
    "tcdc.json"
}

impl Config {
    /// Load the configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;

        std::fs::write(path, json).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the configuration, or create a default file when none exists
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            return Self::from_file(path);
        }

        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Granularity to diff with, honoring an explicit override
    pub fn effective_granularity(&self) -> GranularityMode {
        self.granularity
            .unwrap_or_else(|| GranularityMode::for_config(&self.diff))
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            diff: DiffConfig::default(),
            granularity: None,
            view: ViewMode::default(),
            color: default_true(),
            show_summary: default_true(),
            log_level: LogLevel::default(),
        }
    }
}
