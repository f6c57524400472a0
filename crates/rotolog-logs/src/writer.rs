//! Log writer with size-based rotation

use std::fs::{self, OpenOptions};
use std::io::Write;

use chrono::{DateTime, Local, Utc};
use colored::{Color, Colorize};
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use rotolog_core::constants::{log_path, rotated_path};
use rotolog_core::{Level, LogConfig, LogRecord, Result};

/// Console color for a level's echo line
fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Cyan,
        Level::Debug => Color::Magenta,
    }
}

/// Per-level file statistics reported by [`Logger::stats`]
#[derive(Debug, Clone, Serialize)]
pub struct LevelStats {
    pub level: Level,
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}

/// Leveled log writer with size-based file rotation.
///
/// Each record is echoed to the console and appended as one JSON line to the
/// level's current file. The check-size / rotate / append sequence runs under
/// a per-level lock, so records for one level land in call order even when
/// `log` is called from several threads. A call returns only once the record
/// is on disk or the failure has been reported.
pub struct Logger {
    config: LogConfig,
    locks: [Mutex<()>; Level::ALL.len()],
}

impl Logger {
    /// Create a writer, ensuring the log directory exists.
    ///
    /// Directory creation is the one fatal path; every later file fault
    /// degrades to console-only reporting.
    pub fn new(config: LogConfig) -> Result<Self> {
        fs::create_dir_all(&config.logs_dir)?;
        Ok(Self {
            config,
            locks: Default::default(),
        })
    }

    /// Storage configuration in effect
    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Emit a record. Never fails observably: file faults are reported to
    /// the console and swallowed, so a logging fault cannot interrupt the
    /// caller's request handling.
    pub fn log(&self, level: Level, message: &str, data: Option<Value>) {
        let record = LogRecord::new(level, message, data);
        self.echo(&record);

        let _guard = self.locks[level.index()].lock();
        if let Err(e) = self.append(&record) {
            warn!("Failed to write to log file: {}", e);
        }
    }

    pub fn error(&self, message: &str, data: Option<Value>) {
        self.log(Level::Error, message, data);
    }

    pub fn warn(&self, message: &str, data: Option<Value>) {
        self.log(Level::Warn, message, data);
    }

    pub fn info(&self, message: &str, data: Option<Value>) {
        self.log(Level::Info, message, data);
    }

    pub fn debug(&self, message: &str, data: Option<Value>) {
        self.log(Level::Debug, message, data);
    }

    /// Colored console echo, independent of the file append
    fn echo(&self, record: &LogRecord) {
        let tag = format!(
            "[{}] [{}]",
            record.timestamp.with_timezone(&Local).format("%H:%M:%S"),
            record.level.upper()
        );
        let tag = tag.color(level_color(record.level));
        match &record.data {
            Some(data) => println!("{} {} {}", tag, record.message, data),
            None => println!("{} {}", tag, record.message),
        }
    }

    /// Append one serialized record, rotating first if the current file has
    /// outgrown the threshold. Caller holds the level's lock.
    fn append(&self, record: &LogRecord) -> Result<()> {
        self.rotate_if_needed(record.level)?;

        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let path = log_path(&self.config.logs_dir, record.level);
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    /// Shift rotated generations and retire the current file once it exceeds
    /// the size threshold.
    ///
    /// The check runs before the triggering append, never mid-write, so the
    /// retired file may be larger than the threshold by up to one record.
    /// No current file exists after a rotation; the next append recreates it.
    fn rotate_if_needed(&self, level: Level) -> Result<()> {
        let current = log_path(&self.config.logs_dir, level);
        let size = match fs::metadata(&current) {
            Ok(meta) => meta.len(),
            // Created lazily on first append
            Err(_) => return Ok(()),
        };
        if size <= self.config.max_file_size {
            return Ok(());
        }

        debug!("Rotating log file: {}", current.display());

        for i in (1..self.config.max_files).rev() {
            let old = rotated_path(&self.config.logs_dir, level, i);
            if old.exists() {
                if i == self.config.max_files - 1 {
                    // Oldest generation ages out
                    fs::remove_file(&old)?;
                } else {
                    fs::rename(&old, rotated_path(&self.config.logs_dir, level, i + 1))?;
                }
            }
        }

        fs::rename(&current, rotated_path(&self.config.logs_dir, level, 1))?;
        Ok(())
    }

    /// Per-level file statistics for the health surface. An absent file is
    /// reported as such, never an error.
    pub fn stats(&self) -> Vec<LevelStats> {
        Level::ALL
            .iter()
            .map(|&level| {
                let path = log_path(&self.config.logs_dir, level);
                match fs::metadata(&path) {
                    Ok(meta) => LevelStats {
                        level,
                        exists: true,
                        size: Some(meta.len()),
                        modified: meta.modified().ok().map(DateTime::<Utc>::from),
                    },
                    Err(_) => LevelStats {
                        level,
                        exists: false,
                        size: None,
                        modified: None,
                    },
                }
            })
            .collect()
    }

    /// Truncate the current file and delete every rotated generation for the
    /// given level, or for all levels when `None`. Safe to call when nothing
    /// exists.
    pub fn clear(&self, level: Option<Level>) {
        match level {
            Some(level) => self.clear_level(level),
            None => {
                for level in Level::ALL {
                    self.clear_level(level);
                }
            }
        }
    }

    fn clear_level(&self, level: Level) {
        let _guard = self.locks[level.index()].lock();

        let current = log_path(&self.config.logs_dir, level);
        if current.exists() {
            if let Err(e) = fs::write(&current, "") {
                warn!("Failed to truncate {}: {}", current.display(), e);
            }
        }

        for i in 1..=self.config.max_files {
            let rotated = rotated_path(&self.config.logs_dir, level, i);
            if rotated.exists() {
                if let Err(e) = fs::remove_file(&rotated) {
                    warn!("Failed to remove {}: {}", rotated.display(), e);
                }
            }
        }
    }
}
