//! Proleptic Gregorian calendar and its Julian Day Number codec.
//!
//! Years use astronomical numbering: 1 BC is year `0`, 2 BC is `-1`.  The
//! codec is exact integer arithmetic (Fliegel & Van Flandern) and is valid
//! from JDN 0 (November 24, 4714 BC) up to [`MAX_JDN`], the last day of the
//! largest representable year.

use crate::jdn::Jdn;
use almanac_core::errors::{Error, Result};
use almanac_core::{DayNumber, MonthNumber, Year};

/// Earliest supported Gregorian year.
pub const MIN_YEAR: Year = -4713;

/// Julian day of January 1, 1 CE.
pub const CE_EPOCH: Jdn = Jdn::new(1_721_426);

/// Julian day of December 31 of year `i32::MAX`.
pub const MAX_JDN: Jdn = Jdn::new(784_354_017_364);

/// Whether a given year is a leap year.
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
///
/// Returns 0 for a month outside `[1, 12]`.
pub fn days_in_month(year: Year, month: MonthNumber) -> DayNumber {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Number of days in a given year.
pub fn days_in_year(year: Year) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Check that `(year, month, day)` is a valid Gregorian date.
pub fn validate(year: Year, month: MonthNumber, day: DayNumber) -> Result<()> {
    if year < MIN_YEAR {
        return Err(Error::UnsupportedYear {
            year,
            min: MIN_YEAR,
            max: i32::MAX,
        });
    }
    if !(1..=12).contains(&month) {
        return Err(Error::InvalidMonth { month });
    }
    let max_day = days_in_month(year, month);
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

/// Convert a Gregorian date to its Julian Day Number.
///
/// # Errors
/// Returns a domain error if the date is not a valid Gregorian date.
pub fn gregorian_to_jdn(year: Year, month: MonthNumber, day: DayNumber) -> Result<Jdn> {
    validate(year, month, day)?;
    Ok(jdn_from_ymd(year, month, day))
}

/// Convert a Julian Day Number to a Gregorian `(year, month, day)`.
///
/// # Errors
/// Returns [`Error::JdnOutOfRange`] for negative Julian days and past
/// [`MAX_JDN`].
pub fn jdn_to_gregorian(jdn: Jdn) -> Result<(Year, MonthNumber, DayNumber)> {
    if !(0..=MAX_JDN.value()).contains(&jdn.value()) {
        return Err(out_of_range(jdn));
    }
    ymd_from_jdn(jdn)
}

/// Day of the year (1–366).
pub fn day_of_year(year: Year, month: MonthNumber, day: DayNumber) -> Result<u16> {
    let jdn = gregorian_to_jdn(year, month, day)?;
    Ok((jdn - jdn_from_ymd(year, 1, 1)) as u16 + 1)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Julian day of an already validated date.
pub(crate) fn jdn_from_ymd(year: Year, month: MonthNumber, day: DayNumber) -> Jdn {
    let (y, m, d) = (i64::from(year), i64::from(month), i64::from(day));
    // (m - 14) / 12 is -1 for January and February, 0 otherwise.
    let a = (m - 14) / 12;
    Jdn::new(
        (1461 * (y + 4800 + a)) / 4 + (367 * (m - 2 - 12 * a)) / 12
            - (3 * ((y + 4900 + a) / 100)) / 4
            + d
            - 32075,
    )
}

/// Decompose a Julian day in `[0, MAX_JDN]`.
pub(crate) fn ymd_from_jdn(jdn: Jdn) -> Result<(Year, MonthNumber, DayNumber)> {
    let j = jdn.value();
    debug_assert!(j >= 0, "julian day {j} before the codec epoch");
    let f = j + 1401 + (((4 * j + 274_277) / 146_097) * 3) / 4 - 38;
    let e = 4 * f + 3;
    let g = (e % 1461) / 4;
    let h = 5 * g + 2;
    let day = (h % 153) / 5 + 1;
    let month = (h / 153 + 2) % 12 + 1;
    let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
    let year = i32::try_from(year).map_err(|_| out_of_range(jdn))?;
    Ok((year, month as u8, day as u8))
}

fn out_of_range(jdn: Jdn) -> Error {
    Error::JdnOutOfRange {
        jdn: jdn.value(),
        min: 0,
        max: MAX_JDN.value(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
