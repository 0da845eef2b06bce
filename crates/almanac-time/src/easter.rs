//! Easter computus and the moving feasts anchored on it.
//!
//! Easter Sunday is expressed as a number of days after March 21 (1 = March
//! 22, 35 = April 25); every moving feast is a fixed day offset from it.

use crate::calendar::CalendarSystem;
use crate::civil_date::CivilDate;
use crate::gregorian;
use crate::jdn::Jdn;
use crate::month::{Month, MonthDay};
use almanac_core::errors::Result;
use almanac_core::Year;

/// A feast whose date is a fixed offset from Easter Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feast {
    /// Shrove Tuesday (Easter − 47).
    MardiGras,
    /// Ash Wednesday (Easter − 46).
    AshWednesday,
    /// Mid-Lent Thursday (Easter − 24).
    MidLent,
    /// Good Friday (Easter − 2).
    GoodFriday,
    /// Easter Sunday itself.
    EasterSunday,
    /// Easter Monday (Easter + 1).
    EasterMonday,
    /// Ascension Thursday (Easter + 39).
    Ascension,
    /// Pentecost / Whit Sunday (Easter + 49).
    Pentecost,
    /// Whit Monday (Easter + 50).
    WhitMonday,
    /// Corpus Christi (Easter + 60).
    CorpusChristi,
}

impl Feast {
    /// All feasts, in calendar order.
    pub const ALL: [Feast; 10] = [
        Feast::MardiGras,
        Feast::AshWednesday,
        Feast::MidLent,
        Feast::GoodFriday,
        Feast::EasterSunday,
        Feast::EasterMonday,
        Feast::Ascension,
        Feast::Pentecost,
        Feast::WhitMonday,
        Feast::CorpusChristi,
    ];

    /// Day offset from Easter Sunday.
    pub fn offset(&self) -> i32 {
        match self {
            Feast::MardiGras => -47,
            Feast::AshWednesday => -46,
            Feast::MidLent => -24,
            Feast::GoodFriday => -2,
            Feast::EasterSunday => 0,
            Feast::EasterMonday => 1,
            Feast::Ascension => 39,
            Feast::Pentecost => 49,
            Feast::WhitMonday => 50,
            Feast::CorpusChristi => 60,
        }
    }

    /// Gregorian date of this feast in `year`.
    pub fn date(&self, year: Year) -> Result<CivilDate> {
        feast_date(year, self.offset())
    }
}

/// Number of days from March 21 to Easter Sunday of `year`, in `[1, 35]`.
///
/// Oudin's algorithm for the Gregorian computus.
pub fn easter_days_after_march_21(year: Year) -> i32 {
    let y = i64::from(year);
    let g = y.rem_euclid(19);
    let c = y.div_euclid(100);
    let h = (c - c.div_euclid(4) - (8 * c + 13).div_euclid(25) + 19 * g + 15).rem_euclid(30);
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (y + y.div_euclid(4) + i + 2 - c + c.div_euclid(4)).rem_euclid(7);
    // Easter falls on March 28 + (i - j).
    (i - j + 7) as i32
}

/// Month and day of Easter Sunday in `year`.
pub fn easter_sunday(year: Year) -> MonthDay {
    let days = easter_days_after_march_21(year);
    if days <= 10 {
        MonthDay::new(Month::March, (21 + days) as u8)
    } else {
        MonthDay::new(Month::April, (days - 10) as u8)
    }
}

/// Julian day of Easter Sunday in `year`.
pub fn easter_jdn(year: Year) -> Jdn {
    gregorian::jdn_from_ymd(year, 3, 21) + i64::from(easter_days_after_march_21(year))
}

/// Gregorian date `offset_days` after Easter Sunday of `year`.
///
/// # Errors
/// Returns [`almanac_core::Error::JdnOutOfRange`] if the date falls before
/// the Gregorian codec's epoch.
pub fn feast_date(year: Year, offset_days: i32) -> Result<CivilDate> {
    let jdn = easter_jdn(year) + i64::from(offset_days);
    let (y, m, d) = gregorian::jdn_to_gregorian(jdn)?;
    Ok(CivilDate::from_parts(CalendarSystem::Gregorian, y, m, d))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
