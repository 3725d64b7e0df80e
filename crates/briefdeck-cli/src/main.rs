//! Briefdeck - analyze assignment briefs with a local language model.

use briefdeck_cli::{commands, Cli, Command, Config, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        Formatter::new(true).error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run() -> briefdeck_cli::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(db) = cli.db {
        config.database = db;
    }
    config
        .analyzer
        .validate()
        .map_err(briefdeck_cli::CliError::Config)?;

    let formatter = Formatter::new(!cli.no_color);

    match cli.command {
        Command::Analyze(args) => {
            commands::execute_analyze(args, &config, &formatter).await?;
        }
        Command::Recent(args) => {
            commands::execute_recent(args, &config, &formatter)?;
        }
        Command::Serve(args) => {
            commands::execute_serve(args, &config).await?;
        }
    }

    Ok(())
}
