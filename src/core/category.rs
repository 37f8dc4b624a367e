use crate::core::engine::AnalyticsEngine;
use crate::core::month::month_filter;
use crate::domain::model::CategoryCount;
use crate::domain::ports::SaleStore;
use crate::utils::error::{AnalyticsError, Result};

impl<S: SaleStore> AnalyticsEngine<S> {
    pub async fn category_breakdown(&self, month: Option<&str>) -> Result<Vec<CategoryCount>> {
        let by_month = month_filter(month)?;

        tracing::debug!(?month, "Computing category breakdown");
        let groups = self
            .store
            .count_by_category(&by_month)
            .await
            .map_err(AnalyticsError::query("fetching pie chart data"))?;

        Ok(groups
            .into_iter()
            .map(|(category, count)| CategoryCount { category, count })
            .collect())
    }
}
