//! Calendar dates in `M/D/YYYY` form
//!
//! Valid years are 2000 through 2050. Day arithmetic uses a fixed 365-day year
//! and a non-leap month table, so `days_to` is an approximation across leap
//! days; ages and availability windows are all defined relative to it.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MIN_YEAR: i32 = 2000;
pub const MAX_YEAR: i32 = 2050;

/// Cumulative days before each month, non-leap
const DAYS_BEFORE_MONTH: [i32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid date: {0}")]
    Invalid(String),
}

/// An immutable month/day/year date
///
/// Field order makes the derived ordering compare year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate {
    year: u16,
    month: u8,
    day: u8,
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0) && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

impl CalendarDate {
    /// Creates a date, validating ranges and days-in-month
    pub fn new(month: u32, day: u32, year: i32) -> Result<Self, DateError> {
        if !Self::is_valid(month, day, year) {
            return Err(DateError::Invalid(format!("{}/{}/{}", month, day, year)));
        }

        Ok(Self {
            year: year as u16,
            month: month as u8,
            day: day as u8,
        })
    }

    /// Returns true if the triple names a real date in the supported range
    pub fn is_valid(month: u32, day: u32, year: i32) -> bool {
        if !(1..=12).contains(&month) || !(MIN_YEAR..=MAX_YEAR).contains(&year) || day < 1 {
            return false;
        }
        day <= days_in_month(month, year)
    }

    /// Returns the system's local date
    pub fn today() -> Result<Self, DateError> {
        let now = chrono::Local::now().date_naive();
        Self::new(now.month(), now.day(), now.year())
    }

    pub fn month(&self) -> u32 {
        self.month as u32
    }

    pub fn day(&self) -> u32 {
        self.day as u32
    }

    pub fn year(&self) -> i32 {
        self.year as i32
    }

    /// Signed day count from `self` to `other`
    pub fn days_to(&self, other: &CalendarDate) -> i32 {
        other.day_number() - self.day_number()
    }

    /// Whole years from `self` to `other`, truncated toward zero
    pub fn years_to(&self, other: &CalendarDate) -> i32 {
        self.days_to(other) / 365
    }

    fn day_number(&self) -> i32 {
        (self.year() - MIN_YEAR) * 365 + DAYS_BEFORE_MONTH[self.month as usize - 1] + self.day as i32
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.month, self.day, self.year)
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses `M/D/YYYY` with one- or two-digit month and day
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DateError::Invalid(s.to_string());

        let parts: Vec<&str> = s.split('/').collect();
        let [month, day, year] = parts.as_slice() else {
            return Err(invalid());
        };

        let well_formed = |part: &str, min: usize, max: usize| {
            (min..=max).contains(&part.len()) && part.chars().all(|c| c.is_ascii_digit())
        };
        if !well_formed(month, 1, 2) || !well_formed(day, 1, 2) || !well_formed(year, 4, 4) {
            return Err(invalid());
        }

        let month: u32 = month.parse().map_err(|_| invalid())?;
        let day: u32 = day.parse().map_err(|_| invalid())?;
        let year: i32 = year.parse().map_err(|_| invalid())?;

        Self::new(month, day, year)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = DateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}
