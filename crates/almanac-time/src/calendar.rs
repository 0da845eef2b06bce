//! `Calendar` trait and the calendar systems the engine knows.
//!
//! Every calendar maps its dates onto Julian Day Numbers and back; any two
//! calendars convert between each other through that pivot.  Code that only
//! needs JDN-mediated conversion works against `&dyn Calendar` and never
//! names a concrete calendar.

use crate::correction::CorrectionTable;
use crate::hijri::{self, HijriReckoning};
use crate::jdn::Jdn;
use crate::{gregorian, indian};
use almanac_core::errors::{Error, Result};
use almanac_core::{DayNumber, MonthNumber, Year};

/// The calendar systems a [`crate::CivilDate`] can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CalendarSystem {
    /// Proleptic Gregorian calendar.
    Gregorian,
    /// Hijri (Islamic lunar) calendar.
    Hijri,
    /// Indian National Civil (Saka) calendar.
    Indian,
}

impl CalendarSystem {
    /// All known systems.
    pub const ALL: [CalendarSystem; 3] = [
        CalendarSystem::Gregorian,
        CalendarSystem::Hijri,
        CalendarSystem::Indian,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            CalendarSystem::Gregorian => "Gregorian",
            CalendarSystem::Hijri => "Hijri",
            CalendarSystem::Indian => "Indian",
        }
    }
}

impl std::fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A calendar that can encode its dates as Julian days and decode them back.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// The system this calendar implements.
    fn system(&self) -> CalendarSystem;

    /// Number of days in `month` of `year`.
    fn days_in_month(&self, year: Year, month: MonthNumber) -> Result<DayNumber>;

    /// Check that `(year, month, day)` is a valid date in this calendar.
    fn validate(&self, year: Year, month: MonthNumber, day: DayNumber) -> Result<()> {
        let max_day = self.days_in_month(year, month)?;
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

    /// Julian day of a date.
    fn to_jdn(&self, year: Year, month: MonthNumber, day: DayNumber) -> Result<Jdn>;

    /// Date of a Julian day.
    fn from_jdn(&self, jdn: Jdn) -> Result<(Year, MonthNumber, DayNumber)>;

    /// Re-express a date of this calendar in `target`.
    fn convert_to(
        &self,
        year: Year,
        month: MonthNumber,
        day: DayNumber,
        target: &dyn Calendar,
    ) -> Result<(Year, MonthNumber, DayNumber)> {
        target.from_jdn(self.to_jdn(year, month, day)?)
    }
}

/// The proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gregorian;

impl Calendar for Gregorian {
    fn system(&self) -> CalendarSystem {
        CalendarSystem::Gregorian
    }

    fn days_in_month(&self, year: Year, month: MonthNumber) -> Result<DayNumber> {
        match gregorian::days_in_month(year, month) {
            0 => Err(Error::InvalidMonth { month }),
            n => Ok(n),
        }
    }

    fn validate(&self, year: Year, month: MonthNumber, day: DayNumber) -> Result<()> {
        gregorian::validate(year, month, day)
    }

    fn to_jdn(&self, year: Year, month: MonthNumber, day: DayNumber) -> Result<Jdn> {
        gregorian::gregorian_to_jdn(year, month, day)
    }

    fn from_jdn(&self, jdn: Jdn) -> Result<(Year, MonthNumber, DayNumber)> {
        gregorian::jdn_to_gregorian(jdn)
    }
}

/// The Hijri calendar under a given reckoning.
///
/// Encoding applies the correction table when the reckoning is
/// [`HijriReckoning::UmmAlQura`]; decoding is always tabular.
#[derive(Debug, Clone, Copy)]
pub struct Hijri<'a> {
    table: &'a CorrectionTable,
    reckoning: HijriReckoning,
}

impl<'a> Hijri<'a> {
    /// Hijri calendar borrowing `table`.
    pub fn new(table: &'a CorrectionTable, reckoning: HijriReckoning) -> Self {
        Hijri { table, reckoning }
    }

    /// The reckoning in use.
    pub fn reckoning(&self) -> HijriReckoning {
        self.reckoning
    }

    /// The borrowed correction table.
    pub fn table(&self) -> &'a CorrectionTable {
        self.table
    }
}

impl Calendar for Hijri<'_> {
    fn system(&self) -> CalendarSystem {
        CalendarSystem::Hijri
    }

    fn days_in_month(&self, year: Year, month: MonthNumber) -> Result<DayNumber> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth { month });
        }
        Ok(hijri::month_length(self.table, year, month, self.reckoning))
    }

    fn validate(&self, year: Year, month: MonthNumber, day: DayNumber) -> Result<()> {
        hijri::validate(self.table, year, month, day, self.reckoning)
    }

    fn to_jdn(&self, year: Year, month: MonthNumber, day: DayNumber) -> Result<Jdn> {
        self.validate(year, month, day)?;
        Ok(hijri::month_start(self.table, year, month, self.reckoning) + i64::from(day) - 1)
    }

    fn from_jdn(&self, jdn: Jdn) -> Result<(Year, MonthNumber, DayNumber)> {
        hijri::jdn_to_hijri(jdn)
    }
}

/// The Indian National Civil (Saka) calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct Indian;

impl Calendar for Indian {
    fn system(&self) -> CalendarSystem {
        CalendarSystem::Indian
    }

    fn days_in_month(&self, year: Year, month: MonthNumber) -> Result<DayNumber> {
        indian::days_in_month(year, month)
    }

    fn validate(&self, year: Year, month: MonthNumber, day: DayNumber) -> Result<()> {
        indian::validate(year, month, day)
    }

    fn to_jdn(&self, year: Year, month: MonthNumber, day: DayNumber) -> Result<Jdn> {
        indian::indian_to_jdn(year, month, day)
    }

    fn from_jdn(&self, jdn: Jdn) -> Result<(Year, MonthNumber, DayNumber)> {
        indian::jdn_to_indian(jdn)
    }
}
