//! Helpers for the two-digit-year dates used by listing exports.
//!
//! Registration dates arrive as `YY.MM.DD` strings (e.g. `24.01.15`). The year
//! is always read as `20YY`. Anything that cannot be read as such a date maps to
//! the Unix epoch, which acts as the "no date" sentinel and always sorts oldest.

use chrono::NaiveDate;

/// Display format for dates shown next to a listing, e.g. `24.01.15.`.
pub const LABEL_FORMAT: &str = "%y.%m.%d.";

/// The "no date" sentinel, 1970-01-01.
pub fn epoch() -> NaiveDate {
    NaiveDate::default()
}

/// Parses a `YY.MM.DD` string into a calendar date in the 21st century.
///
/// Empty and malformed input degrade to [`epoch`] instead of failing.
pub fn parse_short_date(value: &str) -> NaiveDate {
    let value = value.trim();
    if value.is_empty() {
        return epoch();
    }
    match NaiveDate::parse_from_str(&format!("20{}", value), "%Y.%m.%d") {
        Ok(date) => date,
        Err(why) => {
            log::trace!("could not parse date {:?}: {}", value, why);
            epoch()
        }
    }
}

pub fn format_label(date: NaiveDate) -> String {
    date.format(LABEL_FORMAT).to_string()
}

/// Whole days from `date` to `today`. Positive for dates in the past.
pub fn days_between(today: NaiveDate, date: NaiveDate) -> i64 {
    (today - date).num_days()
}
