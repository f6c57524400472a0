//! Clear command implementation

use anyhow::{bail, Result};

use rotolog_core::Level;
use rotolog_logs::Logger;

use crate::cli::ClearArgs;
use crate::output::{print_error, print_success};

pub fn execute(args: ClearArgs) -> Result<()> {
    let config = super::resolve_config(&args.store)?;
    let logger = Logger::new(config)?;

    if args.level == "all" {
        logger.clear(None);
        print_success("All logs cleared");
        return Ok(());
    }

    match args.level.parse::<Level>() {
        Ok(level) => {
            logger.clear(Some(level));
            print_success(&format!("{} logs cleared", level));
            Ok(())
        }
        Err(e) => {
            print_error(&e.to_string());
            bail!(e)
        }
    }
}
