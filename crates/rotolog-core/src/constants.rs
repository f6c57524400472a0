//! Constants and default values for rotolog

use std::path::{Path, PathBuf};

use crate::record::Level;

/// Default log directory name, relative to the working directory
pub const LOGS_DIR: &str = "logs";

/// Default rotation threshold in bytes (5MB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Default number of rotated generations to keep per level
pub const DEFAULT_MAX_FILES: usize = 5;

/// Default tail polling interval in milliseconds
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Default number of records returned by the log read endpoint
pub const DEFAULT_READ_LIMIT: usize = 50;

/// Default HTTP port for the demo server
pub const DEFAULT_PORT: u16 = 3000;

/// Default static assets directory
pub const PUBLIC_DIR: &str = "public";

/// Config file names to search for (in priority order)
pub const CONFIG_FILES: &[&str] = &["rotolog.toml", "rotolog.config.toml"];

/// Get the default logs directory
pub fn default_logs_dir() -> PathBuf {
    PathBuf::from(LOGS_DIR)
}

/// Get the current log file path for a level
pub fn log_path(dir: &Path, level: Level) -> PathBuf {
    dir.join(format!("{}.log", level.as_str()))
}

/// Get the rotated log file path for a level and generation (1 = most recent)
pub fn rotated_path(dir: &Path, level: Level, generation: usize) -> PathBuf {
    dir.join(format!("{}.{}.log", level.as_str(), generation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path() {
        let path = log_path(Path::new("/var/logs"), Level::Info);
        assert_eq!(path, PathBuf::from("/var/logs/info.log"));
    }

    #[test]
    fn test_rotated_path() {
        let dir = Path::new("/var/logs");
        assert_eq!(
            rotated_path(dir, Level::Error, 1),
            PathBuf::from("/var/logs/error.1.log")
        );
        assert_eq!(
            rotated_path(dir, Level::Debug, 5),
            PathBuf::from("/var/logs/debug.5.log")
        );
    }

    #[test]
    fn test_default_logs_dir_is_relative() {
        assert!(default_logs_dir().is_relative());
    }
}
