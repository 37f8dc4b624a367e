use crate::domain::model::SaleRecord;
use chrono::Datelike;

/// Boolean test over a [`SaleRecord`], evaluated by the store.
///
/// Filters are composed explicitly with [`Predicate::and`] / [`Predicate::or`]
/// so the clause structure of every query stays inspectable.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    All,
    /// Calendar month (1-12) of `dateOfSale`, any year.
    SaleMonth(u32),
    /// Case-insensitive substring; the needle is stored lowercased.
    TitleContains(String),
    DescriptionContains(String),
    PriceEquals(f64),
    PricePresent,
    /// Inclusive bounds; `max: None` is unbounded above.
    PriceBetween { min: f64, max: Option<f64> },
    /// Exclusive `floor`, inclusive `max`; `max: None` is unbounded above.
    PriceAbove { floor: f64, max: Option<f64> },
    Sold(bool),
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
}

impl Predicate {
    pub fn title_contains(needle: &str) -> Self {
        Predicate::TitleContains(needle.to_lowercase())
    }

    pub fn description_contains(needle: &str) -> Self {
        Predicate::DescriptionContains(needle.to_lowercase())
    }

    pub fn and(self, other: Predicate) -> Self {
        match self {
            Predicate::And(mut clauses) => {
                clauses.push(other);
                Predicate::And(clauses)
            }
            first => Predicate::And(vec![first, other]),
        }
    }

    pub fn or(self, other: Predicate) -> Self {
        match self {
            Predicate::Or(mut clauses) => {
                clauses.push(other);
                Predicate::Or(clauses)
            }
            first => Predicate::Or(vec![first, other]),
        }
    }

    pub fn matches(&self, record: &SaleRecord) -> bool {
        match self {
            Predicate::All => true,
            Predicate::SaleMonth(month) => record.date_of_sale.month() == *month,
            Predicate::TitleContains(needle) => record.title.to_lowercase().contains(needle),
            Predicate::DescriptionContains(needle) => {
                record.description.to_lowercase().contains(needle)
            }
            Predicate::PriceEquals(price) => record.price == *price,
            Predicate::PricePresent => true,
            Predicate::PriceBetween { min, max } => {
                record.price >= *min && max.map_or(true, |max| record.price <= max)
            }
            Predicate::PriceAbove { floor, max } => {
                record.price > *floor && max.map_or(true, |max| record.price <= max)
            }
            Predicate::Sold(sold) => record.sold == *sold,
            Predicate::And(clauses) => clauses.iter().all(|clause| clause.matches(record)),
            Predicate::Or(clauses) => clauses.iter().any(|clause| clause.matches(record)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(title: &str, price: f64, sold: bool) -> SaleRecord {
        SaleRecord {
            id: 1,
            title: title.to_string(),
            description: "Solid oak frame".to_string(),
            price,
            category: "furniture".to_string(),
            image: String::new(),
            sold,
            date_of_sale: Utc.with_ymd_and_hms(2022, 6, 15, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_text_clauses_ignore_case() {
        let chair = record("Rocking CHAIR", 120.0, true);
        assert!(Predicate::title_contains("chair").matches(&chair));
        assert!(Predicate::description_contains("OAK").matches(&chair));
        assert!(!Predicate::title_contains("table").matches(&chair));
    }

    #[test]
    fn test_price_between_bounds_are_inclusive() {
        let bucket = Predicate::PriceBetween {
            min: 101.0,
            max: Some(200.0),
        };
        assert!(bucket.matches(&record("a", 101.0, true)));
        assert!(bucket.matches(&record("a", 200.0, true)));
        assert!(!bucket.matches(&record("a", 100.5, true)));

        let open = Predicate::PriceBetween {
            min: 901.0,
            max: None,
        };
        assert!(open.matches(&record("a", 1_000_000.0, true)));
    }

    #[test]
    fn test_price_above_excludes_floor() {
        let bucket = Predicate::PriceAbove {
            floor: 100.0,
            max: Some(200.0),
        };
        assert!(!bucket.matches(&record("a", 100.0, true)));
        assert!(bucket.matches(&record("a", 100.5, true)));
        assert!(bucket.matches(&record("a", 200.0, true)));
        assert!(!bucket.matches(&record("a", 200.01, true)));
    }

    #[test]
    fn test_composition_flattens_and_evaluates() {
        let filter = Predicate::SaleMonth(6)
            .and(Predicate::Sold(true))
            .and(Predicate::PricePresent);
        match &filter {
            Predicate::And(clauses) => assert_eq!(clauses.len(), 3),
            other => panic!("expected And, got {:?}", other),
        }
        assert!(filter.matches(&record("a", 5.0, true)));
        assert!(!filter.matches(&record("a", 5.0, false)));

        assert!(Predicate::And(vec![]).matches(&record("a", 5.0, false)));
        assert!(!Predicate::Or(vec![]).matches(&record("a", 5.0, false)));
    }
}
