//! Rotolog Tail - live console monitor for rotolog log directories
//!
//! Polls each level's current file on a fixed interval, reads only the newly
//! appended byte range, and renders every line with level-based coloring.
//! The tailer never signals the writer: the filesystem is the only boundary
//! between them, so it can follow logs produced by any number of writers at
//! the cost of polling latency.

mod render;

pub use render::render;

use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::signal::unix::{signal, SignalKind};
use tracing::debug;

use rotolog_core::constants::log_path;
use rotolog_core::{Level, LogRecord, Result};

/// One tailed line: a parsed record, or the raw text when parsing fails
#[derive(Debug, Clone)]
pub enum TailLine {
    Parsed(LogRecord),
    Raw(String),
}

/// Polling tailer over a log directory's per-level current files.
///
/// Tracks the last-seen byte length of each file and reads only the range
/// appended since the previous cycle.
pub struct Tailer {
    logs_dir: PathBuf,
    interval: Duration,
    offsets: HashMap<Level, u64>,
}

impl Tailer {
    /// Create a tailer over `logs_dir`, snapshotting each file's current
    /// size so pre-existing content is not replayed.
    pub fn new(logs_dir: PathBuf, interval: Duration) -> Self {
        let offsets = Level::ALL
            .iter()
            .map(|&level| (level, file_size(&log_path(&logs_dir, level))))
            .collect();
        Self {
            logs_dir,
            interval,
            offsets,
        }
    }

    /// Run one poll cycle over every level, returning the new lines in file
    /// order per level.
    pub fn tick(&mut self) -> Vec<TailLine> {
        let mut lines = Vec::new();
        for level in Level::ALL {
            self.poll_level(level, &mut lines);
        }
        lines
    }

    /// Read the newly appended byte range of one level's current file.
    ///
    /// A size smaller than the recorded offset means the file was cleared or
    /// rotated out from under us; the offset resets to zero so the whole
    /// file is treated as new on this cycle.
    fn poll_level(&mut self, level: Level, out: &mut Vec<TailLine>) {
        let path = log_path(&self.logs_dir, level);
        let size = file_size(&path);
        let offset = self.offsets.entry(level).or_insert(0);

        if size < *offset {
            debug!("{} shrank, resetting tail offset", path.display());
            *offset = 0;
        }
        if size == *offset {
            return;
        }

        let chunk = match read_range(&path, *offset, size) {
            Ok(chunk) => chunk,
            Err(e) => {
                debug!("Failed to read {}: {}", path.display(), e);
                return;
            }
        };
        *offset = size;

        for line in chunk.lines() {
            if line.trim().is_empty() {
                continue;
            }
            // A parse failure on one line never aborts the rest
            match serde_json::from_str::<LogRecord>(line) {
                Ok(record) => out.push(TailLine::Parsed(record)),
                Err(_) => out.push(TailLine::Raw(line.to_string())),
            }
        }
    }

    /// Poll until SIGINT or SIGTERM. The in-flight cycle always finishes
    /// before the loop exits; there is nothing to flush.
    pub async fn run(mut self) -> Result<()> {
        let mut ticker = tokio::time::interval(self.interval);
        let mut sigint = signal(SignalKind::interrupt())?;
        let mut sigterm = signal(SignalKind::terminate())?;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    for line in self.tick() {
                        println!("{}", render(&line));
                    }
                }
                _ = sigint.recv() => break,
                _ = sigterm.recv() => break,
            }
        }

        Ok(())
    }
}

fn file_size(path: &Path) -> u64 {
    // Absent file reads as size zero
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

fn read_range(path: &Path, start: u64, end: u64) -> std::io::Result<String> {
    let mut file = File::open(path)?;
    file.seek(SeekFrom::Start(start))?;

    let mut buf = Vec::with_capacity((end - start) as usize);
    file.take(end - start).read_to_end(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
