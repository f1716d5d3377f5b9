use serde::Deserialize;

use crate::consts::{MARCH, MAY, NOVEMBER, SEPTEMBER};
use crate::{PlainDate, prelude::*};

/// The portion of the year a season occupies. Fall seasons measure ages
/// against the following calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Term {
    #[display(fmt = "spring")]
    Spring,
    #[display(fmt = "fall")]
    Fall,
}

impl Term {
    /// Term implied by a season's start month: March through May reads as
    /// spring, September through November as fall, anything else defaults
    /// to spring.
    pub const fn from_start_month(month: u8) -> Self {
        match month {
            MARCH..=MAY => Self::Spring,
            SEPTEMBER..=NOVEMBER => Self::Fall,
            _ => Self::Spring,
        }
    }

    /// Term named by an explicit season-type label. Only "fall" (any
    /// casing) selects fall; every other label reads as spring.
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("fall") {
            Self::Fall
        } else {
            Self::Spring
        }
    }
}

/// A season as stored in the remote document store. All fields are
/// optional there; resolution falls back from explicit values to the
/// start date to today. Unknown fields are ignored, since season
/// documents carry plenty of registration data this crate never reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeasonRecord {
    pub year: Option<u16>,
    pub season_type: Option<String>,
    pub start_date: Option<PlainDate>,
}

impl SeasonRecord {
    /// Resolved term. An explicit `seasonType` wins even when a start
    /// date is present; absent both, seasons are spring.
    pub fn term(&self) -> Term {
        if let Some(label) = &self.season_type {
            return Term::from_label(label);
        }
        match &self.start_date {
            Some(start) => Term::from_start_month(start.month()),
            None => Term::Spring,
        }
    }

    /// Resolved nominal year: explicit field, else the start date's year,
    /// else the supplied current date's year.
    pub fn year_or(&self, today: PlainDate) -> u16 {
        self.year
            .or_else(|| self.start_date.map(|start| start.year()))
            .unwrap_or_else(|| today.year())
    }

    /// The year ages are measured against: the nominal year, plus one for
    /// fall seasons. Saturates rather than wrapping on absurd stored
    /// years; downstream date construction rejects the result instead.
    pub fn control_year(&self, today: PlainDate) -> u16 {
        let year = self.year_or(today);
        match self.term() {
            Term::Fall => year.saturating_add(1),
            Term::Spring => year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    fn record(year: Option<u16>, season_type: Option<&str>, start: Option<PlainDate>) -> SeasonRecord {
        SeasonRecord {
            year,
            season_type: season_type.map(str::to_owned),
            start_date: start,
        }
    }

    #[test]
    fn test_term_from_label() {
        assert_eq!(Term::from_label("fall"), Term::Fall);
        assert_eq!(Term::from_label("Fall"), Term::Fall);
        assert_eq!(Term::from_label(" FALL "), Term::Fall);
        assert_eq!(Term::from_label("spring"), Term::Spring);
        // anything that isn't "fall" reads as spring
        assert_eq!(Term::from_label("summer"), Term::Spring);
        assert_eq!(Term::from_label(""), Term::Spring);
    }

    #[test]
    fn test_term_from_start_month() {
        struct TestCase {
            month: u8,
            term: Term,
        }

        let cases = [
            TestCase { month: 1, term: Term::Spring },
            TestCase { month: 3, term: Term::Spring },
            TestCase { month: 5, term: Term::Spring },
            TestCase { month: 6, term: Term::Spring },
            TestCase { month: 8, term: Term::Spring },
            TestCase { month: 9, term: Term::Fall },
            TestCase { month: 11, term: Term::Fall },
            TestCase { month: 12, term: Term::Spring },
        ];

        for case in &cases {
            assert_eq!(
                Term::from_start_month(case.month),
                case.term,
                "month {}",
                case.month
            );
        }
    }

    #[test]
    fn test_explicit_label_wins_over_start_date() {
        // an October start would read as fall, but the explicit label wins
        let season = record(None, Some("spring"), Some(date(2026, 10, 3)));
        assert_eq!(season.term(), Term::Spring);

        let season = record(None, Some("fall"), Some(date(2026, 4, 3)));
        assert_eq!(season.term(), Term::Fall);
    }

    #[test]
    fn test_term_falls_back_to_start_date_then_spring() {
        let season = record(None, None, Some(date(2026, 10, 3)));
        assert_eq!(season.term(), Term::Fall);

        let season = record(None, None, Some(date(2026, 4, 3)));
        assert_eq!(season.term(), Term::Spring);

        let season = record(None, None, None);
        assert_eq!(season.term(), Term::Spring);
    }

    #[test]
    fn test_year_resolution() {
        let today = date(2026, 8, 7);

        let season = record(Some(2027), None, Some(date(2026, 9, 5)));
        assert_eq!(season.year_or(today), 2027, "explicit year wins");

        let season = record(None, None, Some(date(2025, 9, 5)));
        assert_eq!(season.year_or(today), 2025, "start date year next");

        let season = record(None, None, None);
        assert_eq!(season.year_or(today), 2026, "today last");
    }

    #[test]
    fn test_control_year() {
        let today = date(2026, 8, 7);

        let spring = record(Some(2026), Some("spring"), None);
        assert_eq!(spring.control_year(today), 2026);

        let fall = record(Some(2026), Some("fall"), None);
        assert_eq!(fall.control_year(today), 2027);

        // fall inferred from the start date also bumps the year
        let inferred = record(None, None, Some(date(2026, 9, 5)));
        assert_eq!(inferred.control_year(today), 2027);
    }

    #[test]
    fn test_deserialize_document_shape() {
        let season: SeasonRecord = serde_json::from_str(
            r#"{"year": 2026, "seasonType": "fall", "startDate": "2026-09-05", "registrationOpen": true}"#,
        )
        .expect("failed to deserialize season document");
        assert_eq!(season.year, Some(2026));
        assert_eq!(season.term(), Term::Fall);
        assert_eq!(season.start_date, Some(date(2026, 9, 5)));

        let empty: SeasonRecord =
            serde_json::from_str("{}").expect("failed to deserialize empty season document");
        assert_eq!(empty, SeasonRecord::default());
    }
}
