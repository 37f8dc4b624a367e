use crate::core::engine::AnalyticsEngine;
use crate::core::month::month_filter;
use crate::domain::model::Statistics;
use crate::domain::ports::SaleStore;
use crate::domain::predicate::Predicate;
use crate::utils::error::{AnalyticsError, Result};

impl<S: SaleStore> AnalyticsEngine<S> {
    /// Sold/unsold counts and revenue of sold items for one month.
    pub async fn statistics(&self, month: Option<&str>) -> Result<Statistics> {
        let by_month = month_filter(month)?;
        let sold = by_month.clone().and(Predicate::Sold(true));
        let not_sold = by_month.and(Predicate::Sold(false));

        tracing::debug!(?month, "Computing statistics");
        let (sold_items, not_sold_items, total) = tokio::try_join!(
            self.store.count(&sold),
            self.store.count(&not_sold),
            self.store.sum_price(&sold),
        )
        .map_err(AnalyticsError::query("fetching statistics"))?;

        Ok(Statistics {
            total_sale_amount: total.unwrap_or(0.0),
            sold_items,
            not_sold_items,
        })
    }
}
