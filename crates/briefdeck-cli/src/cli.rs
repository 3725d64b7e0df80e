//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Briefdeck - analyze assignment briefs with a local language model.
#[derive(Debug, Parser)]
#[command(name = "briefdeck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Database file path (overrides the config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze an assignment brief from a local file
    Analyze(AnalyzeArgs),

    /// List recently stored analyses
    Recent(RecentArgs),

    /// Start the web UI
    Serve(ServeArgs),
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// The brief to analyze (.pdf or .docx)
    pub file: PathBuf,

    /// Print the model's raw reply instead of the split sections
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for the recent command.
#[derive(Debug, Parser)]
pub struct RecentArgs {
    /// Maximum number of examples to list
    #[arg(short, long, default_value = "10")]
    pub limit: usize,
}

/// Arguments for the serve command.
#[derive(Debug, Parser)]
pub struct ServeArgs {
    /// Bind address (overrides the config file)
    #[arg(short, long)]
    pub bind: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_command_parsing() {
        let cli = Cli::parse_from(["briefdeck", "analyze", "brief.pdf"]);
        match cli.command {
            Command::Analyze(args) => {
                assert_eq!(args.file, PathBuf::from("brief.pdf"));
                assert!(!args.raw);
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_recent_default_limit() {
        let cli = Cli::parse_from(["briefdeck", "recent"]);
        match cli.command {
            Command::Recent(args) => assert_eq!(args.limit, 10),
            _ => panic!("Expected Recent command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["briefdeck", "--no-color", "serve", "--bind", "0.0.0.0:9000"]);
        assert!(cli.no_color);
        match cli.command {
            Command::Serve(args) => assert_eq!(args.bind.as_deref(), Some("0.0.0.0:9000")),
            _ => panic!("Expected Serve command"),
        }
    }
}
