use serde::Serialize;

use crate::PlainDate;
use crate::consts::{GRADUATION_AGE, MAX_DIVISION_AGE, MIN_DIVISION_AGE};
use crate::eligibility::grade_from_age;
use crate::window::BirthWindow;

/// Optional sex restriction carried by catalog divisions (softball
/// brackets are typically girls-only). Table generation leaves it unset;
/// eligibility lookup is date-only either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SexRestriction {
    Girls,
    Boys,
}

/// One age bracket of the division table. A `"12U"` row admits athletes
/// whose season age is 12: older than `min_age`, at most `max_age` as of
/// the control date. The birth-date window is derived from the control
/// date, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Division {
    pub id: String,
    pub label: String,
    pub age: u8,
    pub min_age: u8,
    pub max_age: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex_restriction: Option<SexRestriction>,
    pub window: BirthWindow,
    pub grade: Option<i32>,
    pub graduation_year: i32,
}

/// The inclusive birth-date window admitting season age `age` under the
/// given control date: born on or after `control - (age+1)` years, and
/// strictly before `control - age` years. Returns `None` only when the
/// window would fall off the supported calendar range.
pub fn division_window(control: PlainDate, age: u8) -> Option<BirthWindow> {
    let from = control.years_earlier(u16::from(age) + 1)?;
    let to = control.years_earlier(u16::from(age))?.pred()?;
    BirthWindow::new(from, to).ok()
}

impl Division {
    /// Builds the table row for one nominal age.
    pub fn for_age(control: PlainDate, age: u8) -> Option<Self> {
        let window = division_window(control, age)?;
        let label = format!("{age}U");
        Some(Self {
            id: label.to_ascii_lowercase(),
            label,
            age,
            min_age: age.saturating_sub(1),
            max_age: age,
            sex_restriction: None,
            window,
            grade: grade_from_age(i32::from(age)),
            graduation_year: i32::from(control.year()) + i32::from(GRADUATION_AGE) - i32::from(age),
        })
    }

    /// Tags the row with a sex restriction, for catalog entries.
    pub fn with_sex_restriction(mut self, restriction: SexRestriction) -> Self {
        self.sex_restriction = Some(restriction);
        self
    }
}

/// The full division table for one control date: ages 3 through 18,
/// ascending. Each bracket is computed independently from the control
/// date; nothing is chained between rows.
pub fn generate_divisions(control: PlainDate) -> Vec<Division> {
    (MIN_DIVISION_AGE..=MAX_DIVISION_AGE)
        .filter_map(|age| Division::for_age(control, age))
        .collect()
}

/// First division whose window contains the birth date, or `None` when
/// the athlete is too old or too young for every generated bracket.
pub fn find_eligible_division(birth: PlainDate, divisions: &[Division]) -> Option<&Division> {
    divisions.iter().find(|division| division.window.contains(birth))
}
