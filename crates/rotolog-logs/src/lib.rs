//! Rotolog Logs - leveled log writing, size-based rotation, and read-back
//!
//! The writer and any tailing reader are decoupled through the filesystem
//! only: one JSON record per line, one current file per level, rotated
//! generations numbered newest-first.

mod reader;
mod writer;

pub use reader::LogReader;
pub use writer::{LevelStats, Logger};
