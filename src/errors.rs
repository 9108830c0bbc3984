/*!
 * Error types for the tcdc application.
 *
 * The text pipeline itself is total and never fails; errors only arise at
 * the edges (reading inputs, writing outputs, loading the configuration).
 * Defined with the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file exists but could not be read
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        /// Path of the configuration file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for `Config`
    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        /// Path of the configuration file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// The configuration could not be serialized
    #[error("Failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The configuration file could not be written
    #[error("Failed to write config file {path:?}: {source}")]
    Write {
        /// Path of the configuration file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from configuration handling
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
