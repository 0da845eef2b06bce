//! `CivilDate` — a date tagged with the calendar system it is written in.

use crate::calendar::{Calendar, CalendarSystem, Gregorian, Hijri, Indian};
use crate::correction::CorrectionTable;
use crate::hijri::HijriReckoning;
use almanac_core::errors::Result;
use almanac_core::{DayNumber, MonthNumber, Year};

/// A validated `(year, month, day)` in one calendar system.
///
/// [`CivilDate::new`] validates against each system's uncorrected rules
/// (tabular month lengths for Hijri).  To accept day 30 of a Hijri month
/// that the correction table lengthens, build the date through
/// [`crate::Converter::date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilDate {
    system: CalendarSystem,
    year: Year,
    month: MonthNumber,
    day: DayNumber,
}

impl CivilDate {
    /// Create a date, validating it against `system`.
    pub fn new(
        system: CalendarSystem,
        year: Year,
        month: MonthNumber,
        day: DayNumber,
    ) -> Result<Self> {
        match system {
            CalendarSystem::Gregorian => Gregorian.validate(year, month, day)?,
            CalendarSystem::Hijri => {
                let table = CorrectionTable::uncorrected();
                Hijri::new(&table, HijriReckoning::Tabular).validate(year, month, day)?
            }
            CalendarSystem::Indian => Indian.validate(year, month, day)?,
        }
        Ok(Self::from_parts(system, year, month, day))
    }

    /// Create a Gregorian date.
    pub fn gregorian(year: Year, month: MonthNumber, day: DayNumber) -> Result<Self> {
        Self::new(CalendarSystem::Gregorian, year, month, day)
    }

    /// Create a tabular Hijri date.
    pub fn hijri(year: Year, month: MonthNumber, day: DayNumber) -> Result<Self> {
        Self::new(CalendarSystem::Hijri, year, month, day)
    }

    /// Create a Saka date.
    pub fn indian(year: Year, month: MonthNumber, day: DayNumber) -> Result<Self> {
        Self::new(CalendarSystem::Indian, year, month, day)
    }

    /// Wrap components that have already been validated.
    pub(crate) fn from_parts(
        system: CalendarSystem,
        year: Year,
        month: MonthNumber,
        day: DayNumber,
    ) -> Self {
        CivilDate {
            system,
            year,
            month,
            day,
        }
    }

    /// The calendar system.
    pub fn system(&self) -> CalendarSystem {
        self.system
    }

    /// The year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// The month (1–12).
    pub fn month(&self) -> MonthNumber {
        self.month
    }

    /// The day of the month.
    pub fn day(&self) -> DayNumber {
        self.day
    }

    /// The components as a `(year, month, day)` tuple.
    pub fn ymd(&self) -> (Year, MonthNumber, DayNumber) {
        (self.year, self.month, self.day)
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} ({})",
            self.year, self.month, self.day, self.system
        )
    }
}
