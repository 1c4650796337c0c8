//! Calendar dates for expense records
//!
//! Dates are kept in their canonical `YYYY-MM-DD` text form. Because the
//! format is fixed-width, lexicographic order on the text is the same as
//! chronological order, which is what range totals rely on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated `YYYY-MM-DD` date
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExpenseDate(String);

impl ExpenseDate {
    /// Parse and validate a date string
    pub fn parse(s: &str) -> Result<Self, DateValidationError> {
        let (year, month, day) = split_date(s)?;

        if !(1..=12).contains(&month) {
            return Err(DateValidationError::MonthOutOfRange(month));
        }

        let max_day = days_in_month(year, month);
        if day < 1 || day > max_day {
            return Err(DateValidationError::DayOutOfRange { day, max_day });
        }

        Ok(Self(s.to_string()))
    }

    /// The canonical `YYYY-MM-DD` text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Check whether a string is a calendar-valid `YYYY-MM-DD` date
pub fn validate_date(s: &str) -> bool {
    ExpenseDate::parse(s).is_ok()
}

/// Gregorian leap-year rule
pub fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month (1-12)
pub fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Split `YYYY-MM-DD` into numeric parts, checking the shape only
fn split_date(s: &str) -> Result<(u32, u32, u32), DateValidationError> {
    let bytes = s.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !shape_ok {
        return Err(DateValidationError::BadFormat(s.to_string()));
    }

    // Shape check guarantees these slices are ASCII digits
    let number = |range: std::ops::Range<usize>| {
        s[range]
            .parse::<u32>()
            .map_err(|_| DateValidationError::BadFormat(s.to_string()))
    };

    Ok((number(0..4)?, number(5..7)?, number(8..10)?))
}

impl FromStr for ExpenseDate {
    type Err = DateValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ExpenseDate {
    type Error = DateValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ExpenseDate> for String {
    fn from(date: ExpenseDate) -> Self {
        date.0
    }
}

impl fmt::Display for ExpenseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reasons a date string is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateValidationError {
    BadFormat(String),
    MonthOutOfRange(u32),
    DayOutOfRange { day: u32, max_day: u32 },
}

impl fmt::Display for DateValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadFormat(s) => write!(f, "Invalid date '{}'. Please use YYYY-MM-DD", s),
            Self::MonthOutOfRange(m) => write!(f, "Month {} is out of range (1-12)", m),
            Self::DayOutOfRange { day, max_day } => {
                write!(f, "Day {} is out of range (1-{})", day, max_day)
            }
        }
    }
}

impl std::error::Error for DateValidationError {}
