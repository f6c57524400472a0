//! Log storage configuration
//!
//! All knobs are fixed at writer construction; there is no runtime mutation.
//! A `rotolog.toml` in the working directory can override the defaults, and
//! CLI flags override both.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::*;
use crate::error::{Error, Result};

/// Log storage and rotation settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Directory holding the per-level log files
    pub logs_dir: PathBuf,
    /// Rotation threshold in bytes for a level's current file
    pub max_file_size: u64,
    /// Maximum number of rotated generations to keep per level
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            logs_dir: default_logs_dir(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

impl LogConfig {
    /// Parse a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: LogConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Search `dir` for a config file, returning defaults when none exists
    pub fn discover(dir: &Path) -> Result<Self> {
        for name in CONFIG_FILES {
            let candidate = dir.join(name);
            if candidate.exists() {
                return Self::load(&candidate);
            }
        }
        Ok(Self::default())
    }

    fn validate(&self) -> Result<()> {
        if self.max_file_size == 0 {
            return Err(Error::config("max_file_size must be greater than zero"));
        }
        if self.max_files == 0 {
            return Err(Error::config("max_files must be greater than zero"));
        }
        Ok(())
    }
}
