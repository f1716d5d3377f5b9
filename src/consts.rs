/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for control-date fallbacks
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March
pub const MARCH: u8 = 3;
/// Month number for May
pub const MAY: u8 = 5;
/// Month number for August
pub const AUGUST: u8 = 8;
/// Month number for September
pub const SEPTEMBER: u8 = 9;
/// Month number for November
pub const NOVEMBER: u8 = 11;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Month-first format separator (legacy US format)
pub const MONTH_FIRST_SEPARATOR: char = '/';
/// Separator inside a sport's "MM-DD" age-control rule
pub const RULE_SEPARATOR: char = '-';

/// Youngest age bracket generated for the division table ("3U")
pub const MIN_DIVISION_AGE: u8 = 3;
/// Oldest age bracket generated for the division table ("18U")
pub const MAX_DIVISION_AGE: u8 = 18;

/// Season age of a kindergartner; `grade = season_age - GRADE_AGE_OFFSET`
pub const GRADE_AGE_OFFSET: i32 = 6;
/// Lowest valid grade (kindergarten)
pub const KINDERGARTEN_GRADE: i32 = 0;
/// Highest valid grade (12th, senior year)
pub const SENIOR_GRADE: i32 = 12;
/// Age in the graduation year; `graduation_year = control_year + GRADUATION_AGE - season_age`
pub const GRADUATION_AGE: u8 = 18;

/// School years roll over in August, independent of any sport's control date
pub const SCHOOL_YEAR_START_MONTH: u8 = AUGUST;
