use crate::core::engine::{AnalyticsEngine, SalesQuery, DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::core::month::month_filter;
use crate::core::search::search_filter;
use crate::domain::model::{PageWindow, SaleRecord};
use crate::domain::ports::SaleStore;
use crate::utils::error::{AnalyticsError, Result};

fn positive(field: &'static str, raw: Option<&str>, default: usize) -> Result<usize> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    match raw.trim().parse::<usize>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(AnalyticsError::InvalidPagination {
            field,
            value: raw.to_string(),
        }),
    }
}

/// Turn 1-indexed page/limit parameters into a store window.
pub fn page_window(page: Option<&str>, limit: Option<&str>) -> Result<PageWindow> {
    let page = positive("page", page, DEFAULT_PAGE)?;
    let limit = positive("limit", limit, DEFAULT_LIMIT)?;

    Ok(PageWindow {
        skip: (page - 1).saturating_mul(limit),
        limit,
    })
}

impl<S: SaleStore> AnalyticsEngine<S> {
    /// One page of records matching month AND search, in store order.
    pub async fn list_transactions(&self, query: &SalesQuery) -> Result<Vec<SaleRecord>> {
        let filter = month_filter(query.month())?
            .and(search_filter(query.search.as_deref().unwrap_or_default()));
        let window = page_window(query.page.as_deref(), query.limit.as_deref())?;

        tracing::debug!(?window, "Listing transactions");
        self.store
            .find(&filter, window)
            .await
            .map_err(AnalyticsError::query("fetching transactions"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_window_defaults() {
        assert_eq!(
            page_window(None, None).unwrap(),
            PageWindow { skip: 0, limit: 10 }
        );
    }

    #[test]
    fn test_page_window_skips_previous_pages() {
        assert_eq!(
            page_window(Some("3"), Some("25")).unwrap(),
            PageWindow { skip: 50, limit: 25 }
        );
    }

    #[test]
    fn test_page_window_rejects_non_positive() {
        for (page, limit) in [("0", "10"), ("1", "0"), ("-2", "10"), ("two", "10")] {
            assert!(matches!(
                page_window(Some(page), Some(limit)),
                Err(AnalyticsError::InvalidPagination { .. })
            ));
        }
    }
}
