//! Where a Hijri or Saka (month, day) lands within a Gregorian year.
//!
//! These are the calls a public-holiday list builder makes: given a target
//! Gregorian year and a fixed day of another calendar, find the Gregorian
//! date(s) carrying it.  A Hijri year is eleven days shorter than a
//! Gregorian one, so a Hijri day may occur twice in one Gregorian year or
//! not at all.

use crate::calendar::CalendarSystem;
use crate::civil_date::CivilDate;
use crate::correction::CorrectionTable;
use crate::easter::Feast;
use crate::hijri::{self, HijriReckoning};
use crate::jdn::Jdn;
use crate::{gregorian, indian};
use almanac_core::ensure;
use almanac_core::errors::{Error, Result};
use almanac_core::{DayNumber, MonthNumber, Year};

/// Gregorian dates in `gregorian_year` that fall on Hijri `month`/`day`,
/// in ascending order.
///
/// Hijri years in which the day does not exist (day 30 of a 29-day month)
/// contribute nothing.
///
/// # Errors
/// Returns a domain error for an invalid month, a day outside `[1, 30]`, or
/// a Gregorian year that ends before 1 Muharram 1 AH (July 19, 622).  In 622
/// itself only the days from the Hijri epoch onwards are searched.
pub fn hijri_occurrences(
    table: &CorrectionTable,
    reckoning: HijriReckoning,
    gregorian_year: Year,
    month: MonthNumber,
    day: DayNumber,
) -> Result<Vec<CivilDate>> {
    if !(1..=12).contains(&month) {
        return Err(Error::InvalidMonth { month });
    }
    ensure!(
        (1..=30).contains(&day),
        "hijri day {day} out of range [1, 30]"
    );
    let (first, last) = year_bounds(gregorian_year)?;
    let (first_hijri, _, _) = hijri::jdn_to_hijri(first.max(hijri::EPOCH))?;
    let (last_hijri, _, _) = hijri::jdn_to_hijri(last)?;

    // One extra year on each side: corrections can shift a date across
    // January 1.
    let mut found = Vec::new();
    for year in (first_hijri - 1).max(1)..=last_hijri.saturating_add(1) {
        if day > hijri::month_length(table, year, month, reckoning) {
            continue;
        }
        let jdn = hijri::month_start(table, year, month, reckoning) + i64::from(day) - 1;
        if (first..=last).contains(&jdn) {
            found.push(gregorian_date(jdn)?);
        }
    }
    Ok(found)
}

/// Gregorian dates in `gregorian_year` that fall on Saka `month`/`day`, in
/// ascending order.
///
/// # Errors
/// Returns a domain error for an invalid month, a day outside `[1, 31]`, or
/// an unsupported Gregorian year.
pub fn indian_occurrences(
    gregorian_year: Year,
    month: MonthNumber,
    day: DayNumber,
) -> Result<Vec<CivilDate>> {
    ensure!(
        (1..=31).contains(&day),
        "saka day {day} out of range [1, 31]"
    );
    let (first, last) = year_bounds(gregorian_year)?;
    let mut found = Vec::new();
    // Saka months 10-12 of the year begun last March fall in January-March.
    for year in [
        gregorian_year - indian::ERA_OFFSET - 1,
        gregorian_year - indian::ERA_OFFSET,
    ] {
        if day > indian::days_in_month(year, month)? {
            continue;
        }
        let jdn = indian::indian_to_jdn(year, month, day)?;
        if (first..=last).contains(&jdn) {
            found.push(gregorian_date(jdn)?);
        }
    }
    Ok(found)
}

/// Date of an Easter-anchored feast in `gregorian_year`.
pub fn feast_in_year(gregorian_year: Year, feast: Feast) -> Result<CivilDate> {
    feast.date(gregorian_year)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn year_bounds(gregorian_year: Year) -> Result<(Jdn, Jdn)> {
    Ok((
        gregorian::gregorian_to_jdn(gregorian_year, 1, 1)?,
        gregorian::gregorian_to_jdn(gregorian_year, 12, 31)?,
    ))
}

fn gregorian_date(jdn: Jdn) -> Result<CivilDate> {
    let (y, m, d) = gregorian::ymd_from_jdn(jdn)?;
    Ok(CivilDate::from_parts(CalendarSystem::Gregorian, y, m, d))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(dates: &[CivilDate]) -> Vec<(i32, u8, u8)> {
        dates.iter().map(CivilDate::ymd).collect()
    }

    #[test]
    fn eid_al_fitr_2024() {
        let table = CorrectionTable::uncorrected();
        let dates = hijri_occurrences(&table, HijriReckoning::Tabular, 2024, 10, 1).unwrap();
        assert_eq!(ymd(&dates), vec![(2024, 4, 10)]);
    }

    #[test]
    fn hijri_new_year_twice_in_2008() {
        // 1 Muharram 1429 = 10 January 2008, 1 Muharram 1430 = 29 December 2008.
        let table = CorrectionTable::uncorrected();
        let dates = hijri_occurrences(&table, HijriReckoning::Tabular, 2008, 1, 1).unwrap();
        assert_eq!(ymd(&dates), vec![(2008, 1, 10), (2008, 12, 29)]);
    }

    #[test]
    fn hijri_rejects_bad_input() {
        let table = CorrectionTable::uncorrected();
        assert!(hijri_occurrences(&table, HijriReckoning::Tabular, 2024, 13, 1).is_err());
        assert!(hijri_occurrences(&table, HijriReckoning::Tabular, 2024, 1, 31).is_err());
        assert!(hijri_occurrences(&table, HijriReckoning::Tabular, 500, 1, 1).is_err());
        assert!(hijri_occurrences(&table, HijriReckoning::Tabular, 621, 1, 1).is_err());
    }

    #[test]
    fn epoch_year_622() {
        // January 1, 622 precedes the Hijri epoch; the year is still searched
        // from July 19 onwards.
        let table = CorrectionTable::uncorrected();
        let dates = hijri_occurrences(&table, HijriReckoning::Tabular, 622, 1, 1).unwrap();
        assert_eq!(ymd(&dates), vec![(622, 7, 19)]);
        let dates = hijri_occurrences(&table, HijriReckoning::Tabular, 622, 6, 1).unwrap();
        assert_eq!(ymd(&dates), vec![(622, 12, 14)]);
    }

    #[test]
    fn indian_new_year() {
        assert_eq!(
            ymd(&indian_occurrences(2024, 1, 1).unwrap()),
            vec![(2024, 3, 21)]
        );
        assert_eq!(
            ymd(&indian_occurrences(2023, 1, 1).unwrap()),
            vec![(2023, 3, 22)]
        );
    }

    #[test]
    fn indian_day_from_previous_saka_year() {
        // Magha 6, 1945 = 26 January 2024
        assert_eq!(
            ymd(&indian_occurrences(2024, 11, 6).unwrap()),
            vec![(2024, 1, 26)]
        );
    }

    #[test]
    fn feast_boundary() {
        let d = feast_in_year(2024, Feast::GoodFriday).unwrap();
        assert_eq!(d.ymd(), (2024, 3, 29));
    }
}
