//! Indian National Civil (Saka) calendar.
//!
//! Saka year `Y` begins in Gregorian year `Y + 78`: on March 21 when that
//! Gregorian year is a leap year, on March 22 otherwise.  Chaitra (month 1)
//! has 31 days in leap years and 30 otherwise; months 2–6 have 31 days and
//! months 7–12 have 30.  The conversion is exact in both directions.

use crate::gregorian;
use crate::jdn::Jdn;
use almanac_core::errors::{Error, Result};
use almanac_core::{DayNumber, MonthNumber, Year};

/// Years between the Saka era and the Gregorian era.
pub const ERA_OFFSET: Year = 78;

/// Earliest supported Saka year (its Chaitra falls in Gregorian
/// [`gregorian::MIN_YEAR`] + 1).
pub const MIN_YEAR: Year = gregorian::MIN_YEAR - ERA_OFFSET + 1;

/// Latest supported Saka year: the last one whose Gregorian start year is
/// representable.
pub const MAX_YEAR: Year = Year::MAX - ERA_OFFSET;

/// Zero-based Gregorian day of the year on which the Saka year begins
/// (March 22, or March 21 in leap years).
pub const YEAR_START_DAY_OFFSET: i64 = 80;

/// Days in months 2–6 together.
const LONG_MONTHS_DAYS: i64 = 31 * 5;

/// Whether Saka year `year` is a leap year.
///
/// Defined for every `year`, including those past [`MAX_YEAR`].
pub fn is_leap_year(year: Year) -> bool {
    let g = i64::from(year) + i64::from(ERA_OFFSET);
    (g % 4 == 0 && g % 100 != 0) || g % 400 == 0
}

/// Number of days in a month.
///
/// # Errors
/// Returns [`Error::UnsupportedYear`] outside [`MIN_YEAR`]..=[`MAX_YEAR`]
/// and [`Error::InvalidMonth`] for a month outside `[1, 12]`.
pub fn days_in_month(year: Year, month: MonthNumber) -> Result<DayNumber> {
    check_year(year)?;
    match month {
        1 if is_leap_year(year) => Ok(31),
        1 => Ok(30),
        2..=6 => Ok(31),
        7..=12 => Ok(30),
        _ => Err(Error::InvalidMonth { month }),
    }
}

/// Number of days in a year.
pub fn days_in_year(year: Year) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Check that `(year, month, day)` is a valid Saka date.
pub fn validate(year: Year, month: MonthNumber, day: DayNumber) -> Result<()> {
    let max_day = days_in_month(year, month)?;
    if day == 0 || day > max_day {
        return Err(Error::InvalidDay {
            year,
            month,
            day,
            max_day,
        });
    }
    Ok(())
}

/// Julian day of Chaitra 1 of `year`.
///
/// # Errors
/// Returns [`Error::UnsupportedYear`] outside [`MIN_YEAR`]..=[`MAX_YEAR`].
pub fn epoch_jdn(year: Year) -> Result<Jdn> {
    check_year(year)?;
    let gregorian_year = year + ERA_OFFSET;
    let start_day = if gregorian::is_leap_year(gregorian_year) {
        21
    } else {
        22
    };
    Ok(gregorian::jdn_from_ymd(gregorian_year, 3, start_day))
}

/// Convert a Saka date to its Julian Day Number.
pub fn indian_to_jdn(year: Year, month: MonthNumber, day: DayNumber) -> Result<Jdn> {
    validate(year, month, day)?;
    Ok(epoch_jdn(year)? + days_before_month(year, month) + i64::from(day) - 1)
}

/// Convert a Julian Day Number to a Saka `(year, month, day)`.
///
/// # Errors
/// Returns [`Error::JdnOutOfRange`] for negative Julian days.
pub fn jdn_to_indian(jdn: Jdn) -> Result<(Year, MonthNumber, DayNumber)> {
    let (gregorian_year, _, _) = gregorian::jdn_to_gregorian(jdn)?;
    let mut day_of_year = jdn - gregorian::jdn_from_ymd(gregorian_year, 1, 1);
    let mut year = gregorian_year - ERA_OFFSET;

    if day_of_year < YEAR_START_DAY_OFFSET {
        // Still in the Saka year that began last March.
        year -= 1;
        day_of_year += chaitra_days(year) + LONG_MONTHS_DAYS + 30 * 3 + 10;
    } else {
        day_of_year -= YEAR_START_DAY_OFFSET;
    }

    let chaitra = chaitra_days(year);
    if day_of_year < chaitra {
        return Ok((year, 1, day_of_year as u8 + 1));
    }
    let rest = day_of_year - chaitra;
    let (month, day) = if rest < LONG_MONTHS_DAYS {
        (rest / 31 + 2, rest % 31 + 1)
    } else {
        let rest = rest - LONG_MONTHS_DAYS;
        (rest / 30 + 7, rest % 30 + 1)
    };
    Ok((year, month as u8, day as u8))
}

/// Convert a Saka date to a Gregorian `(year, month, day)`.
pub fn indian_to_gregorian(
    year: Year,
    month: MonthNumber,
    day: DayNumber,
) -> Result<(Year, MonthNumber, DayNumber)> {
    gregorian::jdn_to_gregorian(indian_to_jdn(year, month, day)?)
}

/// Convert a Gregorian date to a Saka `(year, month, day)`.
pub fn gregorian_to_indian(
    year: Year,
    month: MonthNumber,
    day: DayNumber,
) -> Result<(Year, MonthNumber, DayNumber)> {
    jdn_to_indian(gregorian::gregorian_to_jdn(year, month, day)?)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn check_year(year: Year) -> Result<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(Error::UnsupportedYear {
            year,
            min: MIN_YEAR,
            max: MAX_YEAR + 1,
        });
    }
    Ok(())
}

fn chaitra_days(year: Year) -> i64 {
    if is_leap_year(year) {
        31
    } else {
        30
    }
}

/// Days between Chaitra 1 and the 1st of `month` (already validated).
fn days_before_month(year: Year, month: MonthNumber) -> i64 {
    let m = i64::from(month);
    match month {
        1 => 0,
        2..=7 => chaitra_days(year) + 31 * (m - 2),
        _ => chaitra_days(year) + LONG_MONTHS_DAYS + 30 * (m - 7),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
