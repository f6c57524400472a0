//! Log record and level types

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Hostname of this process, resolved once
static HOSTNAME: Lazy<String> =
    Lazy::new(|| sysinfo::System::host_name().unwrap_or_else(|| "unknown".to_string()));

/// Log severity level
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Error,
    Warn,
    Info,
    Debug,
}

impl Level {
    /// All levels, in severity order
    pub const ALL: [Level; 4] = [Level::Error, Level::Warn, Level::Info, Level::Debug];

    /// Lowercase name, used for file names and route parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Debug => "debug",
        }
    }

    /// Uppercase name, as stored in records
    pub fn upper(&self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        }
    }

    /// Stable index into per-level tables
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parse a level, falling back to `Info` when unrecognized
    pub fn coerce(s: &str) -> Level {
        s.parse().unwrap_or(Level::Info)
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Level::Error),
            "warn" => Ok(Level::Warn),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            _ => Err(Error::InvalidLevel(s.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single log record, serialized as one JSON object per file line.
///
/// `data` is omitted from the serialized form when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    pub pid: u32,
    pub hostname: String,
}

impl LogRecord {
    /// Build a record stamped with the current time and process identity
    pub fn new(level: Level, message: impl Into<String>, data: Option<serde_json::Value>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.into(),
            data,
            pid: std::process::id(),
            hostname: HOSTNAME.clone(),
        }
    }
}
