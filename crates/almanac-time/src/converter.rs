//! `Converter` — JDN-mediated conversion between any two calendar systems.

use crate::calendar::{Calendar, CalendarSystem, Gregorian, Hijri, Indian};
use crate::civil_date::CivilDate;
use crate::correction::CorrectionTable;
use crate::hijri::HijriReckoning;
use crate::jdn::Jdn;
use almanac_core::errors::Result;
use almanac_core::{DayNumber, MonthNumber, Year};

/// Converts [`CivilDate`]s between calendar systems.
///
/// Borrows the caller's [`CorrectionTable`]; build the table once at
/// startup and share it across converters and threads.
///
/// # Example
/// ```
/// use almanac_time::{CalendarSystem, CivilDate, Converter, CorrectionTable, HijriReckoning};
///
/// let table = CorrectionTable::uncorrected();
/// let converter = Converter::new(&table, HijriReckoning::UmmAlQura);
/// let ramadan = CivilDate::hijri(1445, 9, 1).unwrap();
/// let date = converter.convert(&ramadan, CalendarSystem::Gregorian).unwrap();
/// assert_eq!(date.ymd(), (2024, 3, 11));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    hijri: Hijri<'a>,
}

impl<'a> Converter<'a> {
    /// Create a converter borrowing `table`.
    pub fn new(table: &'a CorrectionTable, reckoning: HijriReckoning) -> Self {
        Converter {
            hijri: Hijri::new(table, reckoning),
        }
    }

    /// The calendar implementing `system`.
    pub fn calendar(&self, system: CalendarSystem) -> &dyn Calendar {
        match system {
            CalendarSystem::Gregorian => &Gregorian,
            CalendarSystem::Hijri => &self.hijri,
            CalendarSystem::Indian => &Indian,
        }
    }

    /// Create a date validated against this converter's rules.
    pub fn date(
        &self,
        system: CalendarSystem,
        year: Year,
        month: MonthNumber,
        day: DayNumber,
    ) -> Result<CivilDate> {
        self.calendar(system).validate(year, month, day)?;
        Ok(CivilDate::from_parts(system, year, month, day))
    }

    /// Julian day of `date`.
    pub fn to_jdn(&self, date: &CivilDate) -> Result<Jdn> {
        self.calendar(date.system())
            .to_jdn(date.year(), date.month(), date.day())
    }

    /// Date of `jdn` in `system`.
    pub fn from_jdn(&self, system: CalendarSystem, jdn: Jdn) -> Result<CivilDate> {
        let (year, month, day) = self.calendar(system).from_jdn(jdn)?;
        Ok(CivilDate::from_parts(system, year, month, day))
    }

    /// Re-express `date` in `target`.
    ///
    /// Converting *from* Hijri applies the correction table under
    /// [`HijriReckoning::UmmAlQura`]; converting *to* Hijri never does.
    pub fn convert(&self, date: &CivilDate, target: CalendarSystem) -> Result<CivilDate> {
        self.from_jdn(target, self.to_jdn(date)?)
    }
}
