use crate::core::engine::{AnalyticsEngine, SalesQuery};
use crate::domain::model::CombinedReport;
use crate::domain::ports::SaleStore;
use crate::utils::error::Result;

impl<S: SaleStore> AnalyticsEngine<S> {
    /// All four facets for one query, fanned out concurrently.
    ///
    /// Fails with the first facet error; no partial report is produced.
    pub async fn combined(&self, query: &SalesQuery) -> Result<CombinedReport> {
        let month = query.month();

        let (transactions, statistics, bar_chart, pie_chart) = tokio::try_join!(
            self.list_transactions(query),
            self.statistics(month),
            self.price_histogram(month),
            self.category_breakdown(month),
        )?;

        Ok(CombinedReport {
            transactions,
            statistics,
            bar_chart,
            pie_chart,
        })
    }
}
