//! Serve command implementation

use std::sync::Arc;

use anyhow::Result;

use rotolog_logs::Logger;

use crate::cli::ServeArgs;
use crate::output::print_success;

pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = super::resolve_config(&args.store)?;
    let logger = Arc::new(Logger::new(config)?);

    print_success(&format!("Serving on http://localhost:{}", args.port));

    let bind_addr = format!("0.0.0.0:{}", args.port);
    rotolog_web::start_server(&bind_addr, logger, args.public).await?;

    Ok(())
}
