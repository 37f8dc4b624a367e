use crate::domain::model::{PageWindow, SaleRecord};
use crate::domain::ports::SaleStore;
use crate::domain::predicate::Predicate;
use crate::utils::error::StoreResult;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

/// In-memory sale store with an optional JSON snapshot on disk.
///
/// Reads share the lock; `replace_all` takes it exclusively and swaps the
/// whole collection, so a reader sees either the old or the new contents.
#[derive(Debug, Default)]
pub struct LocalStore {
    records: RwLock<Vec<SaleRecord>>,
    snapshot_path: Option<PathBuf>,
}

impl LocalStore {
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<SaleRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            snapshot_path: None,
        }
    }

    /// Open a store backed by `path`. A missing file yields an empty store.
    pub async fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        let records = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice::<Vec<SaleRecord>>(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No snapshot at {}, starting with an empty store", path.display());
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!("Opened store with {} records from {}", records.len(), path.display());
        Ok(Self {
            records: RwLock::new(records),
            snapshot_path: Some(path),
        })
    }

    async fn write_snapshot(path: &Path, records: &[SaleRecord]) -> StoreResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let data = serde_json::to_vec(records)?;
        tracing::debug!("Writing snapshot ({} bytes) to {}", data.len(), path.display());
        tokio::fs::write(path, data).await?;
        Ok(())
    }
}

#[async_trait]
impl SaleStore for LocalStore {
    async fn find(&self, filter: &Predicate, window: PageWindow) -> StoreResult<Vec<SaleRecord>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|record| filter.matches(record))
            .skip(window.skip)
            .take(window.limit)
            .cloned()
            .collect())
    }

    async fn count(&self, filter: &Predicate) -> StoreResult<u64> {
        let records = self.records.read().await;
        Ok(records.iter().filter(|record| filter.matches(record)).count() as u64)
    }

    async fn sum_price(&self, filter: &Predicate) -> StoreResult<Option<f64>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|record| filter.matches(record))
            .fold(None, |total: Option<f64>, record| Some(total.unwrap_or(0.0) + record.price)))
    }

    async fn count_by_category(&self, filter: &Predicate) -> StoreResult<Vec<(String, u64)>> {
        let records = self.records.read().await;
        let mut groups: BTreeMap<&str, u64> = BTreeMap::new();
        for record in records.iter().filter(|record| filter.matches(record)) {
            *groups.entry(record.category.as_str()).or_insert(0) += 1;
        }

        Ok(groups
            .into_iter()
            .map(|(category, count)| (category.to_string(), count))
            .collect())
    }

    async fn replace_all(&self, records: Vec<SaleRecord>) -> StoreResult<usize> {
        let mut current = self.records.write().await;
        if let Some(path) = &self.snapshot_path {
            Self::write_snapshot(path, &records).await?;
        }

        *current = records;
        Ok(current.len())
    }

    async fn total_records(&self) -> StoreResult<usize> {
        Ok(self.records.read().await.len())
    }
}
