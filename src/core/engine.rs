use crate::domain::ports::SaleStore;
use serde::Deserialize;
use std::sync::Arc;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// Raw query parameters as they arrive at the boundary.
///
/// Values stay textual here; each facet parses what it needs so that
/// parse failures surface as the engine's own errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SalesQuery {
    pub month: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl SalesQuery {
    pub fn for_month(month: impl Into<String>) -> Self {
        Self {
            month: Some(month.into()),
            ..Self::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_page(mut self, page: usize, limit: usize) -> Self {
        self.page = Some(page.to_string());
        self.limit = Some(limit.to_string());
        self
    }

    pub fn month(&self) -> Option<&str> {
        self.month.as_deref()
    }
}

/// Read-only analytics over a [`SaleStore`].
///
/// The facets live in sibling modules as separate `impl` blocks.
pub struct AnalyticsEngine<S: SaleStore> {
    pub(crate) store: Arc<S>,
}

impl<S: SaleStore> AnalyticsEngine<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }
}

impl<S: SaleStore> Clone for AnalyticsEngine<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}
