use crate::domain::predicate::Predicate;

/// Build the OR of title, description and price clauses for `search`.
///
/// A search that parses as a finite float matches `price` exactly; any
/// other text leaves the price clause permissive. The empty string matches
/// every record through the substring clauses.
pub fn search_filter(search: &str) -> Predicate {
    let price_clause = match search.trim().parse::<f64>() {
        Ok(price) if price.is_finite() => Predicate::PriceEquals(price),
        _ => Predicate::PricePresent,
    };

    Predicate::title_contains(search)
        .or(Predicate::description_contains(search))
        .or(price_clause)
}
