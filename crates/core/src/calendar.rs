//! Calendar helpers for the date/month query filters.
//!
//! The list endpoints accept optional `date=YYYY-MM-DD` and `month=YYYY-MM`
//! query parameters. Malformed values are ignored rather than rejected, so
//! every parser here returns `Option` and the caller simply drops the filter
//! on `None`.

use chrono::{Datelike, NaiveDate};

/// Parse a `date=YYYY-MM-DD` query parameter.
pub fn parse_date_param(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Parse a `month=YYYY-MM` query parameter into the first day of that month.
///
/// Out-of-range months (e.g. `2026-13`) are malformed and yield `None`.
pub fn parse_month_param(raw: &str) -> Option<NaiveDate> {
    let (year, month) = raw.split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// First day of the calendar month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .expect("day 1 of an existing month is always valid")
}

/// Half-open `[start, end)` range covering the calendar month of `month`.
///
/// December rolls over into January of the following year.
pub fn month_range(month: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = first_of_month(month);
    let end = if start.month() == 12 {
        NaiveDate::from_ymd_opt(start.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(start.year(), start.month() + 1, 1)
    }
    .expect("day 1 of an existing month is always valid");
    (start, end)
}
