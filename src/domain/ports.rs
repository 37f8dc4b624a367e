use crate::domain::model::{PageWindow, SaleRecord, SeedReport};
use crate::domain::predicate::Predicate;
use crate::utils::error::{Result, StoreResult};
use async_trait::async_trait;

/// Persistent collection of sale records.
///
/// Everything except [`SaleStore::replace_all`] is read-only.
#[async_trait]
pub trait SaleStore: Send + Sync {
    /// Matching records in insertion order, windowed by `window`.
    async fn find(&self, filter: &Predicate, window: PageWindow) -> StoreResult<Vec<SaleRecord>>;

    async fn count(&self, filter: &Predicate) -> StoreResult<u64>;

    /// Sum of `price` over matches, `None` when nothing matches.
    async fn sum_price(&self, filter: &Predicate) -> StoreResult<Option<f64>>;

    async fn count_by_category(&self, filter: &Predicate) -> StoreResult<Vec<(String, u64)>>;

    /// Destructive replace of the whole collection. Returns the new size.
    async fn replace_all(&self, records: Vec<SaleRecord>) -> StoreResult<usize>;

    async fn total_records(&self) -> StoreResult<usize>;
}

pub trait SeedSettings: Send + Sync {
    fn seed_url(&self) -> &str;
    fn seed_timeout_seconds(&self) -> u64;
}

/// Bulk reload steps: fetch the seed document, decode it, swap it in.
#[async_trait]
pub trait SeedPipeline: Send + Sync {
    async fn extract(&self) -> Result<serde_json::Value>;
    async fn transform(&self, document: serde_json::Value) -> Result<Vec<SaleRecord>>;
    async fn load(&self, records: Vec<SaleRecord>) -> Result<SeedReport>;
}
