pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliArgs;

pub use crate::adapters::{HttpSeedPipeline, LocalStore};
pub use crate::config::AppConfig;
pub use crate::core::{seed::SeedEngine, AnalyticsEngine, SalesQuery};
pub use crate::utils::error::{AnalyticsError, Result, StoreError};
