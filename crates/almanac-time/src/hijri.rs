//! Hijri (Islamic lunar) calendar.
//!
//! Dates are computed with the tabular arithmetic calendar (30-year cycle,
//! months alternating 30/29 days, eleven leap years per cycle) and, for
//! Hijri→Gregorian conversions, refined with the Umm al-Qura
//! [`CorrectionTable`].
//!
//! # Correction is one-directional
//! [`hijri_to_gregorian`] adds the table's day offset when building a
//! Gregorian date from a Hijri one.  [`gregorian_to_hijri`] does **not**
//! subtract it: the reverse direction always returns the *tabular* Hijri
//! date.  Within the tabulated window (1420–1459 AH) the two directions can
//! therefore disagree by the month's offset, so
//! `gregorian_to_hijri(hijri_to_gregorian(d))` is not always `d`.

use crate::correction::CorrectionTable;
use crate::gregorian;
use crate::jdn::Jdn;
use almanac_core::errors::{Error, Result};
use almanac_core::{DayNumber, MonthNumber, Year};

/// Julian day of 1 Muharram 1 AH in the tabular calendar.
pub const EPOCH: Jdn = Jdn::new(1_948_440);

/// Julian day of the last day of Hijri year `i32::MAX`.
pub const MAX_JDN: Jdn = Jdn::new(760_998_570_148);

/// First year for which [`days_in_month`] answers.
pub const MONTH_LENGTH_MIN_YEAR: Year = 1320;

/// First year past the range [`days_in_month`] answers for.
pub const MONTH_LENGTH_MAX_YEAR: Year = 1460;

/// How Hijri dates are mapped onto Julian days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HijriReckoning {
    /// Tabular arithmetic refined by the Umm al-Qura correction table.
    #[default]
    UmmAlQura,
    /// Pure tabular arithmetic.
    Tabular,
}

/// Whether `year` is a leap year (355 days) of the tabular calendar.
pub fn is_leap_year(year: Year) -> bool {
    (14 + 11 * i64::from(year)).rem_euclid(30) < 11
}

/// Month length in the tabular calendar.
///
/// Odd months have 30 days, even months 29, and Dhu al-Hijjah gains a day
/// in leap years.  Returns 0 for a month outside `[1, 12]`.
pub fn tabular_days_in_month(year: Year, month: MonthNumber) -> DayNumber {
    match month {
        12 if is_leap_year(year) => 30,
        1..=12 if month % 2 == 1 => 30,
        1..=12 => 29,
        _ => 0,
    }
}

/// Number of days in a tabular Hijri year.
pub fn days_in_year(year: Year) -> u16 {
    if is_leap_year(year) {
        355
    } else {
        354
    }
}

/// Month length for years `[1320, 1460)`, measured between the first days
/// of consecutive months.
///
/// With [`HijriReckoning::UmmAlQura`] both month starts are shifted by the
/// correction table.  Returns 0 outside that year range or for a month
/// outside `[1, 12]`.
pub fn days_in_month(
    table: &CorrectionTable,
    year: Year,
    month: MonthNumber,
    reckoning: HijriReckoning,
) -> DayNumber {
    if !(MONTH_LENGTH_MIN_YEAR..MONTH_LENGTH_MAX_YEAR).contains(&year)
        || !(1..=12).contains(&month)
    {
        return 0;
    }
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let start = month_start(table, year, month, reckoning);
    let end = month_start(table, next_year, next_month, reckoning);
    (end - start) as u8
}

/// Length of a month as used for validating dates under `reckoning`.
///
/// Uses the corrected length where [`days_in_month`] applies, the tabular
/// length elsewhere.
pub fn month_length(
    table: &CorrectionTable,
    year: Year,
    month: MonthNumber,
    reckoning: HijriReckoning,
) -> DayNumber {
    match days_in_month(table, year, month, reckoning) {
        0 => tabular_days_in_month(year, month),
        n => n,
    }
}

/// Check that `(year, month, day)` is a valid Hijri date under `reckoning`.
pub fn validate(
    table: &CorrectionTable,
    year: Year,
    month: MonthNumber,
    day: DayNumber,
    reckoning: HijriReckoning,
) -> Result<()> {
    if year < 1 {
        return Err(Error::UnsupportedYear {
            year,
            min: 1,
            max: i32::MAX,
        });
    }
    if !(1..=12).contains(&month) {
        return Err(Error::InvalidMonth { month });
    }
    let max_day = month_length(table, year, month, reckoning);
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

/// Uncorrected (tabular) Julian day of a Hijri date.
///
/// # Errors
/// Returns a domain error if the date is not a valid tabular Hijri date.
pub fn hijri_to_jdn(year: Year, month: MonthNumber, day: DayNumber) -> Result<Jdn> {
    validate(
        &CorrectionTable::uncorrected(),
        year,
        month,
        day,
        HijriReckoning::Tabular,
    )?;
    Ok(tabular_jdn(year, month, day))
}

/// Tabular Hijri date of a Julian day.
///
/// # Errors
/// Returns [`Error::JdnOutOfRange`] before 1 Muharram 1 AH and past
/// [`MAX_JDN`].
pub fn jdn_to_hijri(jdn: Jdn) -> Result<(Year, MonthNumber, DayNumber)> {
    if !(EPOCH..=MAX_JDN).contains(&jdn) {
        return Err(out_of_range(jdn));
    }
    let mut l = jdn.value() - 1_948_440 + 10_632;
    let n = (l - 1) / 10_631;
    l = l - 10_631 * n + 354;
    let j = ((10_985 - l) / 5_316) * ((50 * l) / 17_719) + (l / 5_670) * ((43 * l) / 15_238);
    l = l - ((30 - j) / 15) * ((17_719 * j) / 50) - (j / 16) * ((15_238 * j) / 43) + 29;
    let month = (24 * l) / 709;
    let day = l - (709 * month) / 24;
    let year = i32::try_from(30 * n + j - 30).map_err(|_| out_of_range(jdn))?;
    Ok((year, month as u8, day as u8))
}

/// Convert a Hijri date to a Gregorian `(year, month, day)`.
///
/// With [`HijriReckoning::UmmAlQura`] the month's correction offset is added
/// to the tabular Julian day, and day 30 is accepted wherever the corrected
/// month has 30 days.
pub fn hijri_to_gregorian(
    table: &CorrectionTable,
    year: Year,
    month: MonthNumber,
    day: DayNumber,
    reckoning: HijriReckoning,
) -> Result<(Year, MonthNumber, DayNumber)> {
    validate(table, year, month, day, reckoning)?;
    let jdn = tabular_jdn(year, month, day) + i64::from(offset(table, year, month, reckoning));
    gregorian::jdn_to_gregorian(jdn)
}

/// Convert a Gregorian date to its **tabular** Hijri `(year, month, day)`.
///
/// No correction is subtracted; see the module documentation.
pub fn gregorian_to_hijri(
    year: Year,
    month: MonthNumber,
    day: DayNumber,
) -> Result<(Year, MonthNumber, DayNumber)> {
    jdn_to_hijri(gregorian::gregorian_to_jdn(year, month, day)?)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Tabular Julian day without validation.
pub(crate) fn tabular_jdn(year: Year, month: MonthNumber, day: DayNumber) -> Jdn {
    let (y, m, d) = (i64::from(year), i64::from(month), i64::from(day));
    Jdn::new((11 * y + 3) / 30 + 354 * y + 30 * m - (m - 1) / 2 + d + 1_948_440 - 385)
}

/// Julian day of the 1st of a month under `reckoning`.
pub(crate) fn month_start(
    table: &CorrectionTable,
    year: Year,
    month: MonthNumber,
    reckoning: HijriReckoning,
) -> Jdn {
    tabular_jdn(year, month, 1) + i64::from(offset(table, year, month, reckoning))
}

fn out_of_range(jdn: Jdn) -> Error {
    Error::JdnOutOfRange {
        jdn: jdn.value(),
        min: EPOCH.value(),
        max: MAX_JDN.value(),
    }
}

fn offset(
    table: &CorrectionTable,
    year: Year,
    month: MonthNumber,
    reckoning: HijriReckoning,
) -> i32 {
    match reckoning {
        HijriReckoning::UmmAlQura => table.offset_for(year, month),
        HijriReckoning::Tabular => 0,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
