pub mod category;
pub mod combined;
pub mod engine;
pub mod histogram;
pub mod listing;
pub mod month;
pub mod search;
pub mod seed;
pub mod statistics;

pub use crate::domain::model::{
    CategoryCount, CombinedReport, PageWindow, PriceRangeCount, SaleRecord, SeedReport, Statistics,
};
pub use crate::domain::ports::{SaleStore, SeedPipeline, SeedSettings};
pub use crate::domain::predicate::Predicate;
pub use crate::utils::error::Result;
pub use engine::{AnalyticsEngine, SalesQuery};
