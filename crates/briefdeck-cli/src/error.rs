//! Error types for the CLI.

use thiserror::Error;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced to the terminal user.
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration problem
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file parse error
    #[error("Could not parse config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// Document extraction failed
    #[error(transparent)]
    Extract(#[from] briefdeck_extract::ExtractError),

    /// Analysis failed
    #[error(transparent)]
    Analyze(#[from] briefdeck_analyzer::AnalyzeError),

    /// Example store failed
    #[error(transparent)]
    Store(#[from] briefdeck_store::StoreError),

    /// Web server failed
    #[error(transparent)]
    Web(#[from] briefdeck_web::WebError),
}
