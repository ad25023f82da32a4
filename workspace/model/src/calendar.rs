//! Date helpers shared by the loader and the compute crate.
//!
//! Months are grouped by an integer index (`year * 12 + month - 1`) so that
//! they can live in a plain `Int32` column and sort naturally.

use chrono::{Datelike, NaiveDate};

/// Day-first format used by every date column of the sales file
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Parses a `DD-MM-YYYY` date, coercing empty or malformed values to `None`.
pub fn parse_day_first(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Month index of the month containing `date`
pub fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}

/// First day of the month identified by `index`
pub fn month_from_index(index: i32) -> Option<NaiveDate> {
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> Option<NaiveDate> {
    month_from_index(month_index(date))
}
