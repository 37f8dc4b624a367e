#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::SeedSettings;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const DEFAULT_SEED_URL: &str = "https://s3.amazonaws.com/roxiler.com/product_transaction.json";
pub const DEFAULT_SEED_TIMEOUT_SECONDS: u64 = 30;

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub bind: String,
    /// Snapshot file for the store; `None` keeps records in memory only.
    pub data_file: Option<String>,
    pub seed_url: String,
    pub seed_timeout_seconds: u64,
    pub seed_on_start: bool,
    pub json_logs: bool,
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            data_file: None,
            seed_url: DEFAULT_SEED_URL.to_string(),
            seed_timeout_seconds: DEFAULT_SEED_TIMEOUT_SECONDS,
            seed_on_start: false,
            json_logs: false,
            verbose: false,
        }
    }
}

impl SeedSettings for AppConfig {
    fn seed_url(&self) -> &str {
        &self.seed_url
    }

    fn seed_timeout_seconds(&self) -> u64 {
        self.seed_timeout_seconds
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_socket_addr("bind", &self.bind)?;
        validation::validate_url("seed_url", &self.seed_url)?;
        validation::validate_positive_number("seed_timeout_seconds", self.seed_timeout_seconds, 1)?;
        if let Some(path) = &self.data_file {
            validation::validate_path("data_file", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_timeout_and_bad_bind() {
        let config = AppConfig {
            seed_timeout_seconds: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            bind: "localhost".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
