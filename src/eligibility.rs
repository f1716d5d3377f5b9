use serde::Serialize;

use crate::PlainDate;
use crate::consts::{
    GRADE_AGE_OFFSET, GRADUATION_AGE, JANUARY, KINDERGARTEN_GRADE, MIN_DAY,
    SCHOOL_YEAR_START_MONTH, SENIOR_GRADE,
};
use crate::division::{find_eligible_division, generate_divisions};
use crate::season::SeasonRecord;
use crate::sport::SportRecord;

/// Source of the current calendar date. Every operation that can touch
/// "today" takes one of these, so the library stays deterministic under
/// test; only the application's composition boundary should hand in
/// [`SystemClock`].
pub trait Clock {
    fn today(&self) -> PlainDate;
}

/// Reads the real-world date in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> PlainDate {
        use chrono::Datelike;
        let now = chrono::Utc::now();
        PlainDate::clamped(now.year(), now.month(), now.day())
    }
}

/// The anchor date ages are measured against for one season of one sport.
///
/// Resolution order for the month and day: the sport's configured
/// `"MM-DD"` rule, then the recognized sport's default (baseball May 1,
/// softball January 1), each applied to the season's control year. A rule
/// that cannot land on the control year (February 29 of a non-leap year,
/// year out of range) falls through like a malformed one. With no usable
/// rule at all, the result is January 1 of the **current** year — not the
/// control year. Admin tooling for rule-less sports has always leaned on
/// that behavior, so it is kept as is.
pub fn derive_control_date<C: Clock>(
    season: &SeasonRecord,
    sport: &SportRecord,
    clock: &C,
) -> PlainDate {
    let today = clock.today();
    let control_year = season.control_year(today);

    let resolved = sport
        .configured_rule()
        .and_then(|rule| rule.on_year(control_year))
        .or_else(|| {
            sport
                .sport()
                .default_rule()
                .and_then(|rule| rule.on_year(control_year))
        });

    match resolved {
        Some(control) => control,
        None => PlainDate::from_ymd(today.year(), JANUARY, MIN_DAY).unwrap_or(today),
    }
}

/// An athlete's age in whole years as of the control date. A birthday
/// landing exactly on the control date counts as already reached.
///
/// Callers must branch on a missing birth date before getting here;
/// there is no "unknown age" value.
pub fn season_age(birth: PlainDate, control: PlainDate) -> i32 {
    let mut age = i32::from(control.year()) - i32::from(birth.year());
    if control.month_day() < birth.month_day() {
        age -= 1;
    }
    age
}

/// The grade suggestion shown when an admin configures a program's
/// birth-date cutoff.
///
/// This is not [`season_age`] fed through [`grade_from_age`]: here a
/// birthday on or before the control date counts the athlete down a
/// year, so a child turning 11 the June after a May 1 control date
/// suggests grade 5. The two boundary conventions disagree on purpose
/// and existing rosters depend on each; keep the call sites separate.
pub fn max_grade_from_birth_date(birth: PlainDate, control: PlainDate) -> Option<i32> {
    let mut age = i32::from(control.year()) - i32::from(birth.year());
    if birth.month_day() <= control.month_day() {
        age -= 1;
    }
    grade_from_age(age)
}

/// School grade for a season age: kindergarten at 6, grade 12 at 18.
/// Out-of-range ages have no grade; nothing is clamped.
pub fn grade_from_age(age: i32) -> Option<i32> {
    let grade = age - GRADE_AGE_OFFSET;
    (KINDERGARTEN_GRADE..=SENIOR_GRADE)
        .contains(&grade)
        .then_some(grade)
}

/// Expected high-school graduation year for a season age. Always defined;
/// range-checking the age is the caller's job.
pub fn graduation_year_from_age(age: i32, control: PlainDate) -> i32 {
    i32::from(control.year()) + i32::from(GRADUATION_AGE) - age
}

/// Current school grade implied by a graduation year, as of an arbitrary
/// date. School years roll over in August; this anchor is independent of
/// any sport's control date, and the two must not be mixed — this feeds
/// family profile display, never roster eligibility.
pub fn calculate_current_grade(graduation_year: i32, as_of: PlainDate) -> Option<i32> {
    let school_year = if as_of.month() >= SCHOOL_YEAR_START_MONTH {
        i32::from(as_of.year())
    } else {
        i32::from(as_of.year()) - 1
    };
    let grade = SENIOR_GRADE - (graduation_year - school_year - 1);
    (KINDERGARTEN_GRADE..=SENIOR_GRADE)
        .contains(&grade)
        .then_some(grade)
}

/// Everything the lookup tool renders for one athlete against one
/// control date. `grade` and `graduation_year` are the grade-exemption
/// pair: both present or both absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    pub season_age: i32,
    pub division_id: Option<String>,
    pub grade: Option<i32>,
    pub graduation_year: Option<i32>,
}

/// Full eligibility readout: season age, the matching division bracket,
/// and the grade exemption when the age carries one.
pub fn evaluate(birth: PlainDate, control: PlainDate) -> EligibilityResult {
    let age = season_age(birth, control);
    let divisions = generate_divisions(control);
    let division = find_eligible_division(birth, &divisions);
    let grade = grade_from_age(age);
    EligibilityResult {
        season_age: age,
        division_id: division.map(|found| found.id.clone()),
        grade,
        graduation_year: grade.map(|_| graduation_year_from_age(age, control)),
    }
}
