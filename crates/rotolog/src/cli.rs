//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use rotolog_core::constants::{DEFAULT_POLL_INTERVAL_MS, DEFAULT_PORT, PUBLIC_DIR};

#[derive(Parser)]
#[command(name = "rotolog")]
#[command(
    version,
    about = "Leveled file logging with rotation and a live tail console"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output in JSON format instead of tables
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the demo HTTP service backed by the log writer
    Serve(ServeArgs),

    /// Watch the log files and render new records to the console
    Tail(TailArgs),

    /// Write a single record from the command line
    Emit(EmitArgs),

    /// Show per-level log file statistics
    Stats(StoreArgs),

    /// Truncate a level's current file and delete its rotated generations
    Clear(ClearArgs),
}

/// Log storage flags shared by every subcommand
#[derive(Args)]
pub struct StoreArgs {
    /// Log directory (defaults to ./logs or the config file value)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Rotation threshold in bytes
    #[arg(long)]
    pub max_file_size: Option<u64>,

    /// Rotated generations to keep per level
    #[arg(long)]
    pub max_files: Option<usize>,
}

#[derive(Args)]
pub struct ServeArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Static assets directory
    #[arg(long, default_value = PUBLIC_DIR)]
    pub public: PathBuf,
}

#[derive(Args)]
pub struct TailArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Polling interval in milliseconds
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL_MS)]
    pub interval_ms: u64,
}

#[derive(Args)]
pub struct EmitArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Record message
    pub message: String,

    /// Record level (unrecognized levels fall back to info)
    #[arg(short, long, default_value = "info")]
    pub level: String,

    /// Structured JSON payload attached to the record
    #[arg(long)]
    pub data: Option<String>,
}

#[derive(Args)]
pub struct ClearArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Level to clear, or "all"
    pub level: String,
}
