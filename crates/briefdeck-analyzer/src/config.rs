//! Configuration for the analysis orchestrator

use serde::{Deserialize, Serialize};

/// Configuration for the [`Analyzer`](crate::Analyzer)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// How many stored examples to replay as few-shot context.
    ///
    /// Capping this bounds prompt size and latency; three is enough for a
    /// small local model to pick up the house format.
    pub example_limit: usize,

    /// Maximum brief length in characters
    pub max_brief_length: usize,
}

impl AnalyzerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_brief_length == 0 {
            return Err("max_brief_length must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            example_limit: 3,
            max_brief_length: 100_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalyzerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.example_limit, 3);
    }

    #[test]
    fn test_invalid_max_brief_length() {
        let config = AnalyzerConfig {
            max_brief_length: 0,
            ..AnalyzerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_toml() {
        let config =
            AnalyzerConfig::from_toml("example_limit = 5\nmax_brief_length = 20000").unwrap();
        assert_eq!(config.example_limit, 5);
        assert_eq!(config.max_brief_length, 20_000);
    }
}
