//! `Weekday` — day-of-week enum.

use crate::jdn::Jdn;

/// Day of the week.
///
/// Variants are numbered 1–7 (Monday = 1, Sunday = 7), the ISO-8601
/// convention.  [`Weekday::days_from_sunday`] gives the Sunday-based
/// numbering used by liturgical calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// Construct from the ISO ordinal (1 = Monday … 7 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Weekday of a Julian day.  JDN 0 is a Monday.
    pub fn from_jdn(jdn: Jdn) -> Self {
        match jdn.value().rem_euclid(7) {
            0 => Weekday::Monday,
            1 => Weekday::Tuesday,
            2 => Weekday::Wednesday,
            3 => Weekday::Thursday,
            4 => Weekday::Friday,
            5 => Weekday::Saturday,
            _ => Weekday::Sunday,
        }
    }

    /// Return the ISO ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Return the Sunday-based number (0 = Sunday … 6 = Saturday).
    pub fn days_from_sunday(&self) -> u8 {
        self.ordinal() % 7
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jdn_epoch_is_monday() {
        assert_eq!(Weekday::from_jdn(Jdn::new(0)), Weekday::Monday);
        assert_eq!(Weekday::from_jdn(Jdn::new(-1)), Weekday::Sunday);
    }

    #[test]
    fn j2000_is_saturday() {
        // 2000-01-01
        assert_eq!(Weekday::from_jdn(Jdn::new(2_451_545)), Weekday::Saturday);
    }

    #[test]
    fn sunday_based_numbering() {
        assert_eq!(Weekday::Sunday.days_from_sunday(), 0);
        assert_eq!(Weekday::Monday.days_from_sunday(), 1);
        assert_eq!(Weekday::Saturday.days_from_sunday(), 6);
    }

    #[test]
    fn ordinal_roundtrip() {
        for n in 1..=7u8 {
            assert_eq!(Weekday::from_ordinal(n).unwrap().ordinal(), n);
        }
        assert!(Weekday::from_ordinal(0).is_none());
        assert!(Weekday::from_ordinal(8).is_none());
    }
}
