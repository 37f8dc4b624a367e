use crate::core::engine::AnalyticsEngine;
use crate::core::month::month_filter;
use crate::domain::model::PriceRangeCount;
use crate::domain::ports::SaleStore;
use crate::domain::predicate::Predicate;
use crate::utils::error::{AnalyticsError, Result};
use futures::future::try_join_all;

/// Price bucket labelled `min-max`; `max: None` is open-ended.
///
/// Every bucket after the first starts just above the previous bucket's
/// `max`, so fractional prices such as 100.5 still land in exactly one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBucket {
    pub min: u32,
    pub max: Option<u32>,
}

pub const PRICE_BUCKETS: [PriceBucket; 10] = [
    PriceBucket { min: 0, max: Some(100) },
    PriceBucket { min: 101, max: Some(200) },
    PriceBucket { min: 201, max: Some(300) },
    PriceBucket { min: 301, max: Some(400) },
    PriceBucket { min: 401, max: Some(500) },
    PriceBucket { min: 501, max: Some(600) },
    PriceBucket { min: 601, max: Some(700) },
    PriceBucket { min: 701, max: Some(800) },
    PriceBucket { min: 801, max: Some(900) },
    PriceBucket { min: 901, max: None },
];

impl PriceBucket {
    pub fn label(&self) -> String {
        match self.max {
            Some(max) => format!("{}-{}", self.min, max),
            None => format!("{}-above", self.min),
        }
    }

    pub fn predicate(&self) -> Predicate {
        let max = self.max.map(f64::from);
        match self.min {
            0 => Predicate::PriceBetween { min: 0.0, max },
            min => Predicate::PriceAbove {
                floor: f64::from(min - 1),
                max,
            },
        }
    }
}

impl<S: SaleStore> AnalyticsEngine<S> {
    /// Per-bucket record counts for one month, in bucket order.
    pub async fn price_histogram(&self, month: Option<&str>) -> Result<Vec<PriceRangeCount>> {
        let by_month = month_filter(month)?;

        tracing::debug!(?month, "Computing price histogram");
        let counts = PRICE_BUCKETS.iter().map(|bucket| {
            let filter = by_month.clone().and(bucket.predicate());
            async move { self.store.count(&filter).await }
        });

        let counts = try_join_all(counts)
            .await
            .map_err(AnalyticsError::query("fetching bar chart data"))?;

        Ok(PRICE_BUCKETS
            .iter()
            .zip(counts)
            .map(|(bucket, count)| PriceRangeCount {
                range: bucket.label(),
                count,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buckets_are_contiguous_and_ordered() {
        for pair in PRICE_BUCKETS.windows(2) {
            assert_eq!(pair[0].max, Some(pair[1].min - 1));
        }
        assert_eq!(PRICE_BUCKETS[0].min, 0);
        assert_eq!(PRICE_BUCKETS[9].max, None);
    }

    #[test]
    fn test_fractional_prices_land_in_one_bucket() {
        use chrono::{TimeZone, Utc};

        for price in [0.0, 50.0, 100.0, 100.5, 200.99, 450.25, 900.0, 900.5, 15_000.0] {
            let record = crate::domain::model::SaleRecord {
                id: 1,
                title: "item".to_string(),
                description: String::new(),
                price,
                category: "misc".to_string(),
                image: String::new(),
                sold: true,
                date_of_sale: Utc.with_ymd_and_hms(2021, 5, 1, 0, 0, 0).unwrap(),
            };
            let hits = PRICE_BUCKETS
                .iter()
                .filter(|bucket| bucket.predicate().matches(&record))
                .count();
            assert_eq!(hits, 1, "price {} matched {} buckets", price, hits);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(PRICE_BUCKETS[0].label(), "0-100");
        assert_eq!(PRICE_BUCKETS[4].label(), "401-500");
        assert_eq!(PRICE_BUCKETS[9].label(), "901-above");
    }
}
