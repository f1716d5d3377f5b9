use serde::Serialize;

use crate::{PlainDate, prelude::*};

/// The inclusive birth-date window for one age division.
/// `from` is the earliest eligible birth date (the oldest athlete the
/// division admits), `to` the latest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[display(fmt = "{from}/{to}")]
pub struct BirthWindow {
    from: PlainDate,
    to: PlainDate,
}

/// Error type for window construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    /// Earliest eligible birth date is after the latest.
    #[error("Invalid birth window: from ({from}) is after to ({to})")]
    Inverted { from: PlainDate, to: PlainDate },
}

impl BirthWindow {
    /// Creates a new window with validation.
    ///
    /// # Errors
    /// Returns `WindowError::Inverted` if `from > to`.
    pub fn new(from: PlainDate, to: PlainDate) -> Result<Self, WindowError> {
        if from > to {
            return Err(WindowError::Inverted { from, to });
        }
        Ok(Self { from, to })
    }

    /// Returns the earliest eligible birth date
    pub const fn from_date(&self) -> PlainDate {
        self.from
    }

    /// Returns the latest eligible birth date
    pub const fn to_date(&self) -> PlainDate {
        self.to
    }

    /// Checks if the window contains a given birth date, inclusive on
    /// both ends.
    pub fn contains(&self, birth: PlainDate) -> bool {
        self.from <= birth && birth <= self.to
    }

    /// Checks if this window shares any date with another window.
    /// Adjacent division brackets must never overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.from <= other.to && other.from <= self.to
    }
}
