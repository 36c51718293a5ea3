//! Calendar dates as they appear on the command line
//!
//! Dates are written `M/D/YYYY` without zero padding (e.g. `3/9/2026`).
//! Lists of dates may be separated by commas, whitespace, or both.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DateError {
    #[error("Invalid date '{0}': expected M/D/YYYY")]
    Format(String),

    #[error("End date {end} must be on or after start date {start}")]
    Range { start: String, end: String },
}

/// Earliest accepted year
pub const MIN_YEAR: i32 = 1;

/// Latest accepted year
pub const MAX_YEAR: i32 = 9999;

/// Parses a single `M/D/YYYY` date
pub fn parse_date(s: &str) -> Result<NaiveDate, DateError> {
    let s = s.trim();
    let invalid = || DateError::Format(s.to_string());

    let parts: Vec<&str> = s.split('/').collect();
    let [month, day, year] = parts.as_slice() else {
        return Err(invalid());
    };

    let month: u32 = month.trim().parse().map_err(|_| invalid())?;
    let day: u32 = day.trim().parse().map_err(|_| invalid())?;
    let year: i32 = year.trim().parse().map_err(|_| invalid())?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(invalid());
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Parses `3/27/2026,4/10/2026 5/1/2026` into a set of dates
pub fn parse_date_list(s: &str) -> Result<BTreeSet<NaiveDate>, DateError> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(parse_date)
        .collect()
}

/// Formats a date back into `M/D/YYYY`
pub fn format_input_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Week title form: full month name and unpadded day (`March 9`)
pub fn format_week_title_date(date: NaiveDate) -> String {
    format!("{} {}", date.format("%B"), date.day())
}

/// Meeting title form: full month name and two-digit day (`March 09`)
pub fn format_meeting_title_date(date: NaiveDate) -> String {
    format!("{} {:02}", date.format("%B"), date.day())
}

/// Inclusive date range with `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateError> {
        if end < start {
            return Err(DateError::Range {
                start: format_input_date(start),
                end: format_input_date(end),
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if the date lies within the range (both ends inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
