use crate::domain::predicate::Predicate;
use crate::utils::error::{AnalyticsError, Result};

/// Parse a 1-12 month and build the matching sale-date predicate.
///
/// Absent or empty input is rejected, never defaulted. Only ASCII digits are
/// accepted once surrounding whitespace is trimmed, so `+3` is invalid.
pub fn month_filter(month: Option<&str>) -> Result<Predicate> {
    let invalid = || AnalyticsError::InvalidMonth {
        value: month.map(str::to_string),
    };

    let parsed: u32 = month
        .map(str::trim)
        .filter(|raw| !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(invalid)?
        .parse()
        .map_err(|_| invalid())?;

    if !(1..=12).contains(&parsed) {
        return Err(invalid());
    }

    Ok(Predicate::SaleMonth(parsed))
}
