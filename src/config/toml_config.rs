use crate::config::AppConfig;
use crate::utils::error::{AnalyticsError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file. Every section and key may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerSection>,
    pub store: Option<StoreSection>,
    pub seed: Option<SeedSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub bind: Option<String>,
    pub json_logs: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSection {
    pub data_file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedSection {
    pub url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub on_start: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AnalyticsError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AnalyticsError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown variables stay verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AnalyticsError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Fill `base` with every value this file sets.
    pub fn apply_to(&self, mut base: AppConfig) -> AppConfig {
        if let Some(server) = &self.server {
            if let Some(bind) = &server.bind {
                base.bind = bind.clone();
            }
            if let Some(json_logs) = server.json_logs {
                base.json_logs = json_logs;
            }
        }

        if let Some(data_file) = self.store.as_ref().and_then(|s| s.data_file.clone()) {
            base.data_file = Some(data_file);
        }

        if let Some(seed) = &self.seed {
            if let Some(url) = &seed.url {
                base.seed_url = url.clone();
            }
            if let Some(timeout) = seed.timeout_seconds {
                base.seed_timeout_seconds = timeout;
            }
            if let Some(on_start) = seed.on_start {
                base.seed_on_start = on_start;
            }
        }

        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[server]
bind = "0.0.0.0:8080"
json_logs = true

[store]
data_file = "./data/sales.json"

[seed]
url = "https://seed.example.com/sales.json"
timeout_seconds = 10
on_start = true
"#;

        let config = TomlConfig::from_toml_str(toml_content)
            .unwrap()
            .apply_to(AppConfig::default());

        assert_eq!(config.bind, "0.0.0.0:8080");
        assert!(config.json_logs);
        assert_eq!(config.data_file.as_deref(), Some("./data/sales.json"));
        assert_eq!(config.seed_url, "https://seed.example.com/sales.json");
        assert_eq!(config.seed_timeout_seconds, 10);
        assert!(config.seed_on_start);
    }

    #[test]
    fn test_missing_sections_keep_defaults() {
        let config = TomlConfig::from_toml_str("[store]\n")
            .unwrap()
            .apply_to(AppConfig::default());

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SALES_TEST_SEED_URL", "https://test.seed.com/data.json");

        let config = TomlConfig::from_toml_str("[seed]\nurl = \"${SALES_TEST_SEED_URL}\"\n").unwrap();
        assert_eq!(
            config.seed.unwrap().url.as_deref(),
            Some("https://test.seed.com/data.json")
        );

        std::env::remove_var("SALES_TEST_SEED_URL");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = TomlConfig::from_toml_str("[server\nbind = ");
        assert!(matches!(result, Err(AnalyticsError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nbind = \"127.0.0.1:9000\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.server.unwrap().bind.as_deref(), Some("127.0.0.1:9000"));
    }
}
