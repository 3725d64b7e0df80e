//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use briefdeck_analyzer::AnalyzerConfig;
use briefdeck_llm::LlmConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Briefdeck configuration, stored as TOML under `~/.briefdeck/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Inference endpoint settings
    #[serde(default)]
    pub llm: LlmConfig,

    /// Orchestrator settings
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Path to the SQLite database file
    #[serde(default = "default_database")]
    pub database: PathBuf,

    /// Bind address for `briefdeck serve`
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Config {
    /// The default configuration file path (`~/.briefdeck/config.toml`).
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".briefdeck").join("config.toml"))
    }

    /// Load configuration from the given path, or from the default path,
    /// falling back to defaults when no file exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default path, creating the directory.
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm: LlmConfig::default(),
            analyzer: AnalyzerConfig::default(),
            database: default_database(),
            bind_addr: default_bind_addr(),
        }
    }
}

fn default_database() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".briefdeck").join("briefdeck.db"))
        .unwrap_or_else(|| PathBuf::from("briefdeck.db"))
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}
