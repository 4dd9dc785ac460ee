//! Two-digit year handling shared by the epoch field and the international designator

use chrono::NaiveDate;

/// Two-digit years below this value belong to the 2000s, the rest to the 1900s.
///
/// Nothing was catalogued before Sputnik (1957), so `57` is the first 1900s year.
pub const CENTURY_PIVOT: u32 = 57;

/// Resolve a two-digit year (0..=99) to a full calendar year.
pub fn expand_two_digit_year(year: u32) -> Option<i32> {
    match year {
        0..=99 if year < CENTURY_PIVOT => Some(2000 + year as i32),
        0..=99 => Some(1900 + year as i32),
        _ => None,
    }
}

/// Resolve a two-digit year and a 1-based day-of-year to a calendar date.
///
/// Day 1 is the 1st of January. Day 0 and days past the end of the year
/// (366 on a non-leap year, 367 and up) don't denote a date.
pub fn epoch_date(year: u32, day_of_year: u32) -> Option<NaiveDate> {
    let full_year = expand_two_digit_year(year)?;
    NaiveDate::from_yo_opt(full_year, day_of_year)
}
