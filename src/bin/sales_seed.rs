use clap::Parser;
use sales_analytics::utils::{logger, validation::Validate};
use sales_analytics::{app, CliArgs, HttpSeedPipeline, SeedEngine};
use std::sync::Arc;

/// One-shot bulk reload into the configured data file.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let config = args.resolve()?;

    logger::init_cli_logger(config.verbose);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if config.data_file.is_none() {
        eprintln!("❌ --data-file is required, an in-memory store would be discarded on exit");
        std::process::exit(1);
    }

    tracing::info!("📥 Seeding from: {}", config.seed_url);
    let store = Arc::new(app::open_store(&config).await?);
    let pipeline = HttpSeedPipeline::new(store, config.clone())?;

    match SeedEngine::new(pipeline).run().await {
        Ok(report) => {
            println!("✅ Loaded {} records", report.records_loaded);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Bulk reload failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    }
}
