//! # almanac-time
//!
//! Conversion between the proleptic Gregorian, Hijri (Umm al-Qura), and
//! Indian National Civil (Saka) calendars, pivoting through Julian Day
//! Numbers, plus the Easter computus and its moving feasts.
//!
//! All conversions are pure integer arithmetic.  The one piece of external
//! data, the Umm al-Qura [`CorrectionTable`], is loaded once by the caller
//! and borrowed by every Hijri conversion that needs it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Calendar` trait and the `CalendarSystem` tag.
pub mod calendar;

/// `CivilDate` — a date tagged with its calendar system.
pub mod civil_date;

/// `Converter` — conversion between calendar systems.
pub mod converter;

/// Umm al-Qura correction table.
pub mod correction;

/// Easter computus and moving feasts.
pub mod easter;

/// Proleptic Gregorian calendar and the JDN codec.
pub mod gregorian;

/// Hijri calendar.
pub mod hijri;

/// Indian National Civil (Saka) calendar.
pub mod indian;

/// `Jdn` — Julian Day Number.
pub mod jdn;

/// `Month` and `MonthDay`.
pub mod month;

/// Hijri/Saka days located within a Gregorian year.
pub mod occurrences;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, CalendarSystem, Gregorian, Hijri, Indian};
pub use civil_date::CivilDate;
pub use converter::Converter;
pub use correction::{CorrectionEntry, CorrectionTable};
pub use easter::{easter_sunday, feast_date, Feast};
pub use hijri::HijriReckoning;
pub use jdn::Jdn;
pub use month::{Month, MonthDay};
pub use occurrences::{feast_in_year, hijri_occurrences, indian_occurrences};
pub use weekday::Weekday;
