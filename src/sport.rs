use serde::Deserialize;

use crate::consts::{JANUARY, MAY, MIN_DAY};
use crate::types::MonthDay;

/// Sports the league recognizes as carrying a default age-control day.
/// Recognition is an exact (case-insensitive) name match; anything else is
/// `Other` and resolves no default rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sport {
    Baseball,
    Softball,
    Other,
}

impl Sport {
    /// Maps a sport's display name onto the tagged set.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        if name.eq_ignore_ascii_case("baseball") {
            Self::Baseball
        } else if name.eq_ignore_ascii_case("softball") {
            Self::Softball
        } else {
            Self::Other
        }
    }

    /// The control day the league applies when a sport has no configured
    /// rule: May 1 for baseball, January 1 for softball.
    pub fn default_rule(self) -> Option<MonthDay> {
        match self {
            Self::Baseball => MonthDay::new(MAY, MIN_DAY).ok(),
            Self::Softball => MonthDay::new(JANUARY, MIN_DAY).ok(),
            Self::Other => None,
        }
    }
}

/// A sport as stored in the remote document store. `ageControlDate` is a
/// free-form `"MM-DD"` string maintained by admins; malformed values read
/// as absent rather than failing, so a typo degrades to the name-based
/// default instead of breaking registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SportRecord {
    pub name: Option<String>,
    pub age_control_date: Option<String>,
}

impl SportRecord {
    /// The admin-configured rule, leniently parsed.
    pub fn configured_rule(&self) -> Option<MonthDay> {
        self.age_control_date
            .as_deref()
            .and_then(|raw| raw.parse().ok())
    }

    /// The tagged sport for this record's display name.
    pub fn sport(&self) -> Sport {
        self.name.as_deref().map_or(Sport::Other, Sport::from_name)
    }
}
