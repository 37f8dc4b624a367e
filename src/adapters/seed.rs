use crate::domain::model::{SaleRecord, SeedReport};
use crate::domain::ports::{SaleStore, SeedPipeline, SeedSettings};
use crate::utils::error::{AnalyticsError, Result};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Fetches the seed document over HTTP and swaps it into the store.
pub struct HttpSeedPipeline<S: SaleStore, C: SeedSettings> {
    store: Arc<S>,
    settings: C,
    client: Client,
}

impl<S: SaleStore, C: SeedSettings> HttpSeedPipeline<S, C> {
    pub fn new(store: Arc<S>, settings: C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.seed_timeout_seconds()))
            .build()
            .map_err(|e| AnalyticsError::ConfigError {
                message: format!("cannot build HTTP client: {}", e),
            })?;

        Ok(Self {
            store,
            settings,
            client,
        })
    }
}

#[async_trait::async_trait]
impl<S: SaleStore, C: SeedSettings> SeedPipeline for HttpSeedPipeline<S, C> {
    async fn extract(&self) -> Result<serde_json::Value> {
        let url = self.settings.seed_url();
        tracing::debug!("Requesting seed document from: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AnalyticsError::bulk_load(format!("request to {} failed", url), e))?;

        tracing::debug!("Seed response status: {}", response.status());
        let response = response
            .error_for_status()
            .map_err(|e| AnalyticsError::bulk_load(format!("{} answered with an error", url), e))?;

        response
            .json()
            .await
            .map_err(|e| AnalyticsError::bulk_load("seed document is not valid JSON", e))
    }

    async fn transform(&self, document: serde_json::Value) -> Result<Vec<SaleRecord>> {
        let serde_json::Value::Array(items) = document else {
            return Err(AnalyticsError::BulkLoadError {
                message: "seed document must be a JSON array of sale records".to_string(),
                source: None,
            });
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value::<SaleRecord>(item).map_err(|e| {
                    AnalyticsError::bulk_load(format!("record #{} could not be decoded", index), e)
                })
            })
            .collect()
    }

    async fn load(&self, records: Vec<SaleRecord>) -> Result<SeedReport> {
        tracing::debug!("Replacing store contents with {} records", records.len());
        let records_loaded = self
            .store
            .replace_all(records)
            .await
            .map_err(|e| AnalyticsError::bulk_load("replacing store contents failed", e))?;

        Ok(SeedReport { records_loaded })
    }
}
