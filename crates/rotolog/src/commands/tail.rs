//! Tail command implementation

use std::time::Duration;

use anyhow::Result;

use rotolog_core::constants::log_path;
use rotolog_core::Level;
use rotolog_tail::Tailer;

use crate::cli::TailArgs;

pub async fn execute(args: TailArgs) -> Result<()> {
    let config = super::resolve_config(&args.store)?;

    for level in Level::ALL {
        println!(
            "Monitoring {} logs: {}",
            level.upper(),
            log_path(&config.logs_dir, level).display()
        );
    }
    println!("Waiting for new log entries... (Ctrl+C to stop)");

    let tailer = Tailer::new(config.logs_dir, Duration::from_millis(args.interval_ms));
    tailer.run().await?;

    println!("Log monitoring stopped.");
    Ok(())
}
