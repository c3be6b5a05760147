//! Configuration-specific error types.

use std::path::PathBuf;

/// Errors raised while reading, writing or interpreting the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `save` was called before a location was resolved
    #[error("Configuration file path not set")]
    FilePathNotSet,

    /// No home directory to derive the default location from
    #[error("Failed to find home directory")]
    HomeDirectoryNotFound,

    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    #[error("Failed to save configuration to {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create configuration directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize configuration: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize configuration: {0}")]
    DeserializationFailed(String),

    /// `theme_name` does not name a bundled theme
    #[error("Unknown theme '{name}' (available: {available})")]
    UnknownTheme { name: String, available: String },
}
