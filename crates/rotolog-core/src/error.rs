//! Error types for rotolog

use std::path::PathBuf;

/// Rotolog error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    #[error("Log file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias for rotolog
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::ConfigError(msg.into())
    }
}
