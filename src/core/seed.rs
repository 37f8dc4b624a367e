use crate::domain::model::SeedReport;
use crate::domain::ports::SeedPipeline;
use crate::utils::error::Result;
use std::time::Instant;

/// Runs the bulk reload: extract, transform, then replace the store.
///
/// The load step is destructive. Readers running while it happens may see
/// facets computed on either side of the swap.
pub struct SeedEngine<P: SeedPipeline> {
    pipeline: P,
}

impl<P: SeedPipeline> SeedEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<SeedReport> {
        let started = Instant::now();
        tracing::info!("Starting bulk reload");

        tracing::info!("Extracting seed document...");
        let document = self.pipeline.extract().await?;

        tracing::info!("Decoding sale records...");
        let records = self.pipeline.transform(document).await?;
        tracing::info!("Decoded {} records", records.len());

        tracing::info!("Replacing store contents...");
        let report = self.pipeline.load(records).await?;
        tracing::info!(
            "Bulk reload finished: {} records in {:?}",
            report.records_loaded,
            started.elapsed()
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SaleRecord;
    use crate::utils::error::AnalyticsError;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct FakePipeline {
        fail_extract: bool,
        loaded: AtomicBool,
    }

    #[async_trait::async_trait]
    impl SeedPipeline for FakePipeline {
        async fn extract(&self) -> Result<serde_json::Value> {
            if self.fail_extract {
                return Err(AnalyticsError::BulkLoadError {
                    message: "unreachable".to_string(),
                    source: None,
                });
            }
            Ok(serde_json::json!([]))
        }

        async fn transform(&self, _document: serde_json::Value) -> Result<Vec<SaleRecord>> {
            Ok(Vec::new())
        }

        async fn load(&self, records: Vec<SaleRecord>) -> Result<SeedReport> {
            self.loaded.store(true, Ordering::SeqCst);
            Ok(SeedReport {
                records_loaded: records.len(),
            })
        }
    }

    #[tokio::test]
    async fn test_run_reports_loaded_records() {
        let engine = SeedEngine::new(FakePipeline {
            fail_extract: false,
            loaded: AtomicBool::new(false),
        });

        let report = engine.run().await.unwrap();
        assert_eq!(report.records_loaded, 0);
        assert!(engine.pipeline.loaded.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_extract_failure_leaves_store_untouched() {
        let engine = SeedEngine::new(FakePipeline {
            fail_extract: true,
            loaded: AtomicBool::new(false),
        });

        assert!(engine.run().await.is_err());
        assert!(!engine.pipeline.loaded.load(Ordering::SeqCst));
    }
}
