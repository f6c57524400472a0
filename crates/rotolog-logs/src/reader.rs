//! Log reader for the recent-records debugging surface

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use rotolog_core::constants::log_path;
use rotolog_core::{Error, Level, LogRecord, Result};

/// Reads parsed records back out of a level's current file
pub struct LogReader {
    path: PathBuf,
}

impl LogReader {
    pub fn new(logs_dir: &Path, level: Level) -> Self {
        Self {
            path: log_path(logs_dir, level),
        }
    }

    /// Read the last `limit` records from the current file, in file order.
    ///
    /// A missing file, an unreadable file, and a malformed line are three
    /// distinguishable failures; callers map each to their own surface.
    pub fn read_recent(&self, limit: usize) -> Result<Vec<LogRecord>> {
        if !self.path.exists() {
            return Err(Error::FileNotFound(self.path.clone()));
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);

        let mut records: VecDeque<LogRecord> = VecDeque::with_capacity(limit + 1);
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            records.push_back(serde_json::from_str(&line)?);
            if records.len() > limit {
                records.pop_front();
            }
        }

        Ok(records.into_iter().collect())
    }

    /// Check if the current file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}
