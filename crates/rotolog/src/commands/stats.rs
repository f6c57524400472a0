//! Stats command implementation

use anyhow::Result;

use rotolog_logs::Logger;

use crate::cli::StoreArgs;
use crate::output::print_stats;

pub fn execute(args: StoreArgs) -> Result<()> {
    let config = super::resolve_config(&args)?;
    let logger = Logger::new(config)?;

    print_stats(&logger.stats());
    Ok(())
}
