//! Test-only constructors shared across the per-module suites.

use crate::eligibility::Clock;
use crate::PlainDate;

/// Builds a `PlainDate`, panicking with context on bad test input.
pub fn date(year: u16, month: u8, day: u8) -> PlainDate {
    PlainDate::from_ymd(year, month, day)
        .unwrap_or_else(|e| panic!("invalid test date {year}-{month}-{day}: {e}"))
}

/// A clock pinned to one date, so control-date fallbacks stay deterministic
/// under test.
pub struct FixedClock(pub PlainDate);

impl Clock for FixedClock {
    fn today(&self) -> PlainDate {
        self.0
    }
}
