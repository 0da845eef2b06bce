//! `Jdn` — Julian Day Number.
//!
//! A continuous integer day count with no calendar-specific meaning.  Every
//! conversion between calendar systems pivots through this type.

use crate::weekday::Weekday;

/// A Julian Day Number.
///
/// JDN 0 is Monday, January 1, 4713 BC (proleptic Julian calendar), which is
/// November 24, 4714 BC in the proleptic Gregorian calendar.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Jdn(i64);

impl Jdn {
    /// Wrap a raw day count.
    pub const fn new(value: i64) -> Self {
        Jdn(value)
    }

    /// Return the raw day count.
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Return the day of the week.
    pub fn weekday(self) -> Weekday {
        Weekday::from_jdn(self)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i64> for Jdn {
    type Output = Self;
    fn add(self, rhs: i64) -> Self {
        Jdn(self.0 + rhs)
    }
}

impl std::ops::Sub<i64> for Jdn {
    type Output = Self;
    fn sub(self, rhs: i64) -> Self {
        Jdn(self.0 - rhs)
    }
}

impl std::ops::Sub<Jdn> for Jdn {
    type Output = i64;
    fn sub(self, rhs: Jdn) -> i64 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i64> for Jdn {
    fn add_assign(&mut self, rhs: i64) {
        self.0 += rhs;
    }
}

impl From<Jdn> for i64 {
    fn from(jdn: Jdn) -> i64 {
        jdn.0
    }
}

impl std::fmt::Display for Jdn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let j = Jdn::new(2_451_545);
        assert_eq!((j + 10).value(), 2_451_555);
        assert_eq!((j - 45).value(), 2_451_500);
        assert_eq!(Jdn::new(2_451_600) - j, 55);
        let mut k = j;
        k += 1;
        assert_eq!(k - j, 1);
    }

    #[test]
    fn ordering_follows_day_count() {
        assert!(Jdn::new(10) < Jdn::new(11));
        assert_eq!(Jdn::new(3).to_string(), "JD 3");
    }
}
