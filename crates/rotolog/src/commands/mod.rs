//! Command implementations

pub mod clear;
pub mod emit;
pub mod serve;
pub mod stats;
pub mod tail;

use rotolog_core::{LogConfig, Result};

use crate::cli::StoreArgs;

/// Resolve the effective log configuration: defaults, then a discovered
/// config file in the working directory, then CLI flags on top.
pub fn resolve_config(args: &StoreArgs) -> Result<LogConfig> {
    let cwd = std::env::current_dir()?;
    let mut config = LogConfig::discover(&cwd)?;

    if let Some(dir) = &args.dir {
        config.logs_dir = dir.clone();
    }
    if let Some(size) = args.max_file_size {
        config.max_file_size = size;
    }
    if let Some(files) = args.max_files {
        config.max_files = files;
    }

    Ok(config)
}
