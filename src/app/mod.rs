pub mod routes;

use crate::adapters::{HttpSeedPipeline, LocalStore};
use crate::config::AppConfig;
use crate::core::seed::SeedEngine;
use crate::utils::error::{AnalyticsError, Result};
use crate::utils::validation::validate_socket_addr;
use std::sync::Arc;

pub use routes::{router, AppState};

/// Open the store configured in `config`.
pub async fn open_store(config: &AppConfig) -> Result<LocalStore> {
    match &config.data_file {
        Some(path) => LocalStore::open(path)
            .await
            .map_err(AnalyticsError::query("opening the store")),
        None => {
            tracing::warn!("No data file configured, records are kept in memory only");
            Ok(LocalStore::in_memory())
        }
    }
}

/// Run the HTTP server until Ctrl-C.
pub async fn serve(config: AppConfig, store: Arc<LocalStore>) -> Result<()> {
    let addr = validate_socket_addr("bind", &config.bind)?;

    if config.seed_on_start {
        let pipeline = HttpSeedPipeline::new(Arc::clone(&store), config.clone())?;
        SeedEngine::new(pipeline).run().await?;
    }

    let app = router(AppState::new(store, config));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Sales analytics API listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
