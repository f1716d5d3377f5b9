mod consts;
mod division;
mod eligibility;
mod prelude;
mod season;
mod sport;
#[cfg(test)]
mod test_utils;
mod types;
mod window;

pub use consts::*;
pub use division::{Division, SexRestriction, division_window, find_eligible_division, generate_divisions};
pub use eligibility::{
    Clock, EligibilityResult, SystemClock, calculate_current_grade, derive_control_date, evaluate,
    grade_from_age, graduation_year_from_age, max_grade_from_birth_date, season_age,
};
pub use season::{SeasonRecord, Term};
pub use sport::{Sport, SportRecord};
pub use types::{Day, Month, MonthDay, Year};
pub use window::{BirthWindow, WindowError};

use crate::prelude::*;
use std::fmt;
use std::str::FromStr;
use types::days_in_month;

/// A concrete calendar date with no time-of-day or timezone component.
///
/// Every age computation in this crate compares plain civil dates, so there
/// is nothing to drift: projecting a `PlainDate` into UTC or a local wall
/// clock is the application boundary's problem. Ordering is chronological
/// and matches the lexicographic order of the ISO rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlainDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl PlainDate {
    /// Creates a date from raw components, validating each in context.
    ///
    /// # Errors
    /// Returns the matching `ParseError` variant for the first invalid
    /// component.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year.get(), month.get())?;
        Ok(Self { year, month, day })
    }

    /// Creates a date by clamping each component into its valid range.
    /// This is the interop constructor for external calendar sources
    /// (the system clock) whose components are already sane; it never
    /// fails and never panics.
    pub fn clamped(year: i32, month: u32, day: u32) -> Self {
        let year = Year::saturating(u16::try_from(year.clamp(1, i32::from(MAX_YEAR))).unwrap_or(MAX_YEAR));
        let month = Month::saturating(u8::try_from(month.clamp(1, u32::from(MAX_MONTH))).unwrap_or(MAX_MONTH));
        let day = Day::saturating(
            u8::try_from(day.clamp(u32::from(MIN_DAY), 31)).unwrap_or(MIN_DAY),
            year.get(),
            month.get(),
        );
        Self { year, month, day }
    }

    /// Returns the year component
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component (1-12)
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component (1-31)
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Month and day as a pair, for within-year comparisons
    #[inline]
    pub const fn month_day(&self) -> (u8, u8) {
        (self.month.get(), self.day.get())
    }

    /// The same calendar day `years` earlier. February 29 lands on
    /// February 28 when the target year is not a leap year. Returns `None`
    /// when the target year falls off the supported range.
    pub fn years_earlier(self, years: u16) -> Option<Self> {
        let year = self.year().checked_sub(years)?;
        let day = self.day().min(days_in_month(year, self.month()));
        Self::from_ymd(year, self.month(), day).ok()
    }

    /// The previous calendar day, rolling across month and year
    /// boundaries. Returns `None` before 0001-01-01.
    pub fn pred(self) -> Option<Self> {
        let (year, month, day) = prev_day(self.year(), self.month(), self.day())?;
        Self::from_ymd(year, month, day).ok()
    }
}

// --- helpers for calendar rollover ---
fn prev_month(year: u16, month: u8) -> Option<(u16, u8)> {
    debug_assert!(month != 0 && month <= MAX_MONTH);
    if month == JANUARY {
        if year <= 1 {
            None
        } else {
            Some((year - 1, DECEMBER))
        }
    } else {
        Some((year, month - 1))
    }
}

fn prev_day(year: u16, month: u8, day: u8) -> Option<(u16, u8, u8)> {
    if day > MIN_DAY {
        Some((year, month, day - 1))
    } else {
        // roll to last of previous month
        prev_month(year, month).map(|(py, pm)| (py, pm, days_in_month(py, pm)))
    }
}

impl FromStr for PlainDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // Strictly enforce delimiters: DATE_SEPARATOR for ISO, MONTH_FIRST_SEPARATOR for month-first
        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let has_slash = trimmed.contains(MONTH_FIRST_SEPARATOR);

        if has_hyphen && has_slash {
            return Err(ParseError::InvalidFormat(format!(
                "Mixed delimiters ({} and {})",
                DATE_SEPARATOR, MONTH_FIRST_SEPARATOR
            )));
        }

        if has_hyphen {
            // ISO format: YYYY-MM-DD
            let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
            if parts.len() != 3 {
                return Err(ParseError::InvalidFormat(format!(
                    "Expected YYYY-MM-DD, found {} segments",
                    parts.len()
                )));
            }
            let year = Self::parse_u16(parts[0])?;
            let month = Self::parse_u8(parts[1])?;
            let day = Self::parse_u8(parts[2])?;
            Self::from_ymd(year, month, day)
        } else if has_slash {
            // Month-first format: MM/DD/YYYY
            let parts: Vec<&str> = trimmed
                .split(MONTH_FIRST_SEPARATOR)
                .map(str::trim)
                .collect();
            if parts.len() != 3 {
                return Err(ParseError::InvalidFormat(format!(
                    "Expected MM/DD/YYYY, found {} segments",
                    parts.len()
                )));
            }
            let month = Self::parse_u8(parts[0])?;
            let day = Self::parse_u8(parts[1])?;
            let year = Self::parse_u16(parts[2])?;
            Self::from_ymd(year, month, day)
        } else {
            Err(ParseError::InvalidFormat(trimmed.to_owned()))
        }
    }
}

impl PlainDate {
    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        s.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl fmt::Display for PlainDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.get(),
            self.month.get(),
            self.day.get()
        )
    }
}

impl serde::Serialize for PlainDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for PlainDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
