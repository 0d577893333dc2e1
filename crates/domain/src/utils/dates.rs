//! Schedule date parsing and rendering
//!
//! The spreadsheet stores dates as `"{Weekday}, {Month} {Day}, {Year}"`, for
//! example `"Monday, April 7, 2025"`. The same shape (with a zero-padded day)
//! is used when the date is rendered into the pinned summary, so attendance
//! keys recovered from summaries parse with the same function.

use chrono::{NaiveDate, Weekday};

use crate::constants::SCHEDULE_DATE_FORMAT;
use crate::errors::RowError;

/// Parse a schedule date such as `"Monday, April 7, 2025"`.
///
/// The weekday must be a valid weekday name but is not cross-checked against
/// the calendar date. The day may be written with one or two digits.
///
/// # Errors
///
/// Returns [`RowError::InvalidDate`] when the value does not follow the
/// `"{Weekday}, {Month} {Day}, {Year}"` shape.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use papersync_domain::parse_schedule_date;
///
/// let date = parse_schedule_date("Monday, April 7, 2025").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2025, 4, 7).unwrap());
/// assert!(parse_schedule_date("April 7 2025").is_err());
/// ```
pub fn parse_schedule_date(value: &str) -> Result<NaiveDate, RowError> {
    let trimmed = value.trim();
    let invalid = |reason: String| RowError::InvalidDate { value: trimmed.to_string(), reason };

    let (weekday, rest) = trimmed.split_once(", ").ok_or_else(|| {
        invalid("expected '{Weekday}, {Month} {Day}, {Year}'".to_string())
    })?;

    weekday
        .trim()
        .parse::<Weekday>()
        .map_err(|_| invalid(format!("unknown weekday '{weekday}'")))?;

    NaiveDate::parse_from_str(rest.trim(), "%B %d, %Y").map_err(|e| invalid(e.to_string()))
}

/// Render a date in the summary format, e.g. `"Monday, April 07, 2025"`.
#[must_use]
pub fn format_schedule_date(date: NaiveDate) -> String {
    date.format(SCHEDULE_DATE_FORMAT).to_string()
}

/// Full English month name, e.g. `"April"`.
#[must_use]
pub fn month_name(date: NaiveDate) -> String {
    date.format("%B").to_string()
}
