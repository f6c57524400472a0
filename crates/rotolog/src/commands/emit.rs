//! Emit command implementation

use anyhow::{Context, Result};

use rotolog_core::Level;
use rotolog_logs::Logger;

use crate::cli::EmitArgs;

pub fn execute(args: EmitArgs) -> Result<()> {
    let config = super::resolve_config(&args.store)?;
    let logger = Logger::new(config)?;

    let level = Level::coerce(&args.level);
    let data = match &args.data {
        Some(raw) => Some(serde_json::from_str(raw).context("Invalid --data JSON")?),
        None => None,
    };

    logger.log(level, &args.message, data);
    Ok(())
}
