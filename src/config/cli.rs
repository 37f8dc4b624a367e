use crate::config::toml_config::TomlConfig;
use crate::config::AppConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// Command line for both binaries. Flags win over the TOML file, which
/// wins over built-in defaults.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "sales-analytics")]
#[command(about = "Month-filtered analytics over product sale records")]
pub struct CliArgs {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "SALES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address the HTTP server listens on (host:port)
    #[arg(long, env = "SALES_BIND")]
    pub bind: Option<String>,

    /// JSON snapshot file backing the store
    #[arg(long, env = "SALES_DATA_FILE")]
    pub data_file: Option<String>,

    /// URL of the seed document used by bulk reload
    #[arg(long, env = "SALES_SEED_URL")]
    pub seed_url: Option<String>,

    #[arg(long)]
    pub seed_timeout_seconds: Option<u64>,

    /// Run a bulk reload before serving
    #[arg(long)]
    pub seed_on_start: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.apply_to(AppConfig::default()),
            None => AppConfig::default(),
        };

        if let Some(bind) = &self.bind {
            config.bind = bind.clone();
        }
        if let Some(data_file) = &self.data_file {
            config.data_file = Some(data_file.clone());
        }
        if let Some(seed_url) = &self.seed_url {
            config.seed_url = seed_url.clone();
        }
        if let Some(timeout) = self.seed_timeout_seconds {
            config.seed_timeout_seconds = timeout;
        }
        config.seed_on_start |= self.seed_on_start;
        config.json_logs |= self.json_logs;
        config.verbose = self.verbose;

        Ok(config)
    }
}
