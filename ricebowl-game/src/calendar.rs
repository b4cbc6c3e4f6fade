//! Calendar model: validated year/month/day triples and month-length rules.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Earliest year the date stepper accepts.
pub const MIN_YEAR: i32 = 1900;

/// Errors raised when a year/month/day triple does not name a real date.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("month {0} is outside 1..=12")]
    MonthOutOfRange(u32),
    #[error("day {day} is outside 1..={max} for {year}-{month:02}")]
    DayOutOfRange {
        year: i32,
        month: u32,
        day: u32,
        max: u32,
    },
    #[error("year {0} cannot be represented")]
    YearUnrepresentable(i32),
    #[error("'{0}' is not a YYYY-MM-DD date")]
    Malformed(String),
}

#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`. Months outside 1..=12 report 0.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// A year/month/day triple that always names a real calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Build a date from its parts.
    ///
    /// # Errors
    ///
    /// Returns an error when the month or day is out of range for the given year,
    /// or when the year cannot be represented by the underlying calendar.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::MonthOutOfRange(month));
        }
        let max = days_in_month(year, month);
        if day == 0 || day > max {
            return Err(CalendarError::DayOutOfRange {
                year,
                month,
                day,
                max,
            });
        }
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(CalendarError::YearUnrepresentable(year));
        }
        Ok(Self { year, month, day })
    }

    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    #[must_use]
    pub const fn day(self) -> u32 {
        self.day
    }

    #[must_use]
    pub fn to_naive_date(self) -> NaiveDate {
        // Construction already proved the triple representable.
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).unwrap_or_default()
    }

    /// Midnight at the start of this date.
    #[must_use]
    pub fn start_of_day(self) -> NaiveDateTime {
        self.to_naive_date().and_time(NaiveTime::MIN)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CalendarError::Malformed(s.to_string());
        let mut parts = s.trim().splitn(3, '-');
        let year = parts
            .next()
            .and_then(|p| p.parse::<i32>().ok())
            .ok_or_else(malformed)?;
        let month = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(malformed)?;
        let day = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(malformed)?;
        Self::new(year, month, day)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}
