//! The serve command: start the web UI.

use crate::cli::ServeArgs;
use crate::config::Config;
use crate::error::Result;
use briefdeck_web::AppState;

/// Start the Briefdeck web server; runs until the process is stopped.
pub async fn execute_serve(args: ServeArgs, config: &Config) -> Result<()> {
    let bind_addr = args.bind.as_deref().unwrap_or(&config.bind_addr);

    let (analyzer, store) = super::build_pipeline(config)?;
    let state = AppState { analyzer, store };

    briefdeck_web::start_server(bind_addr, state).await?;
    Ok(())
}
