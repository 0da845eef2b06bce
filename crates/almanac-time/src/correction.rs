//! Umm al-Qura correction table.
//!
//! The table tabulates, for every Hijri month from 1 Muharram 1420 to
//! 1 Dhu al-Hijjah 1459, the Gregorian date the civil authority assigned to
//! the first day of that month.  Comparing that date with the tabular Hijri
//! arithmetic gives a small signed day offset per (year, month).
//!
//! # Record layout
//! 480 fixed-width records of 11 bytes each, in row-major (year, month)
//! order:
//!
//! | bytes | content                        |
//! |-------|--------------------------------|
//! | 0–1   | day of month, two ASCII digits |
//! | 2     | separator (ignored)            |
//! | 3–4   | month, two ASCII digits        |
//! | 5     | separator (ignored)            |
//! | 6–9   | year, four ASCII digits        |
//! | 10    | terminator (ignored)           |
//!
//! A table is loaded once by the caller and borrowed by every conversion.
//! An empty ("uncorrected") table yields offset 0 everywhere.

use std::io::Read;
use std::path::Path;

use crate::gregorian;
use crate::hijri;
use almanac_core::errors::{Error, Result};
use almanac_core::{MonthNumber, Year};

/// First Hijri year covered by the table.
pub const FIRST_YEAR: Year = 1420;

/// Last Hijri year covered by the table (inclusive).
pub const LAST_YEAR: Year = 1459;

/// Size of one record in bytes.
pub const RECORD_LEN: usize = 11;

/// Number of records in a complete table.
pub const RECORD_COUNT: usize = ((LAST_YEAR - FIRST_YEAR + 1) * 12) as usize;

/// Largest day offset a record may imply before the table is considered
/// malformed.
pub const MAX_DAY_OFFSET: i32 = 2;

/// One decoded table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrectionEntry {
    /// Hijri year.
    pub hijri_year: Year,
    /// Hijri month (1–12).
    pub hijri_month: MonthNumber,
    /// Days to add to the tabular Julian day of the 1st of the month.
    pub day_offset: i32,
}

/// Day offsets from tabular Hijri arithmetic to the civil-authority calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorrectionTable {
    // Indexed by record number minus one; empty when uncorrected.
    offsets: Vec<i32>,
}

impl CorrectionTable {
    /// A table that applies no correction.
    pub fn uncorrected() -> Self {
        CorrectionTable::default()
    }

    /// Parse a complete table from its raw bytes.
    ///
    /// # Errors
    /// Returns [`Error::MalformedTable`] if the length is wrong, a field is
    /// not numeric, a tabulated date is invalid, or a record implies an
    /// offset larger than [`MAX_DAY_OFFSET`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != RECORD_LEN * RECORD_COUNT {
            return Err(Error::MalformedTable(format!(
                "expected {} bytes ({RECORD_COUNT} records of {RECORD_LEN}), found {}",
                RECORD_LEN * RECORD_COUNT,
                bytes.len()
            )));
        }
        let offsets = bytes
            .chunks_exact(RECORD_LEN)
            .enumerate()
            .map(|(index, record)| decode_record(index, record))
            .collect::<Result<Vec<_>>>()?;
        Ok(CorrectionTable { offsets })
    }

    /// Read and parse a complete table from `reader`.
    pub fn load<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::with_capacity(RECORD_LEN * RECORD_COUNT);
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }

    /// Read and parse a complete table from a file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Like [`CorrectionTable::load`], but an unreadable or malformed source
    /// yields the uncorrected table.
    pub fn load_or_uncorrected<R: Read>(reader: R) -> Self {
        Self::load(reader).unwrap_or_default()
    }

    /// Like [`CorrectionTable::open`], but a missing or malformed file
    /// yields the uncorrected table.
    pub fn open_or_uncorrected(path: impl AsRef<Path>) -> Self {
        Self::open(path).unwrap_or_default()
    }

    /// Return `true` if this table applies no correction.
    pub fn is_uncorrected(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Return `true` if `hijri_year` lies within the tabulated window.
    pub fn covers(hijri_year: Year) -> bool {
        (FIRST_YEAR..=LAST_YEAR).contains(&hijri_year)
    }

    /// Signed day offset for the 1st of `hijri_month` in `hijri_year`.
    ///
    /// Returns 0 outside the tabulated years, for a month outside `[1, 12]`,
    /// and for the uncorrected table.
    pub fn offset_for(&self, hijri_year: Year, hijri_month: MonthNumber) -> i32 {
        if !Self::covers(hijri_year) || !(1..=12).contains(&hijri_month) {
            return 0;
        }
        let record = (hijri_year - FIRST_YEAR) as usize * 12 + hijri_month as usize;
        self.offsets.get(record - 1).copied().unwrap_or(0)
    }

    /// Iterate over the decoded entries in table order.
    pub fn entries(&self) -> impl Iterator<Item = CorrectionEntry> + '_ {
        self.offsets
            .iter()
            .enumerate()
            .map(|(index, &day_offset)| {
                let (hijri_year, hijri_month) = year_month_of(index);
                CorrectionEntry {
                    hijri_year,
                    hijri_month,
                    day_offset,
                }
            })
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn year_month_of(index: usize) -> (i32, u8) {
    (FIRST_YEAR + (index / 12) as i32, (index % 12) as u8 + 1)
}

fn decode_record(index: usize, record: &[u8]) -> Result<i32> {
    let malformed =
        |what: &str| Error::MalformedTable(format!("record {}: {what}", index + 1));

    let day = parse_digits(&record[0..2]).ok_or_else(|| malformed("day is not numeric"))?;
    let month = parse_digits(&record[3..5]).ok_or_else(|| malformed("month is not numeric"))?;
    let year = parse_digits(&record[6..10]).ok_or_else(|| malformed("year is not numeric"))?;

    // Both fields are at most two digits, so they fit in a u8.
    let (day, month) = (day as u8, month as u8);
    let tabulated = gregorian::gregorian_to_jdn(year as i32, month, day)
        .map_err(|e| malformed(&e.to_string()))?;

    let (hijri_year, hijri_month) = year_month_of(index);
    let tabular = hijri::tabular_jdn(hijri_year, hijri_month, 1);
    let offset = tabulated - tabular;
    if offset.abs() > i64::from(MAX_DAY_OFFSET) {
        return Err(malformed(&format!(
            "{year:04}-{month:02}-{day:02} is {offset} days from tabular {hijri_year}-{hijri_month:02}-01"
        )));
    }
    Ok(offset as i32)
}

fn parse_digits(field: &[u8]) -> Option<u32> {
    field.iter().try_fold(0u32, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Render a table whose entries follow tabular arithmetic, shifted by the
    /// given per-record offsets.
    fn table_bytes(shift: impl Fn(i32, u8) -> i64) -> Vec<u8> {
        let mut out = Vec::with_capacity(RECORD_LEN * RECORD_COUNT);
        for year in FIRST_YEAR..=LAST_YEAR {
            for month in 1..=12u8 {
                let jdn = hijri::tabular_jdn(year, month, 1) + shift(year, month);
                let (gy, gm, gd) = gregorian::jdn_to_gregorian(jdn).unwrap();
                out.extend_from_slice(format!("{gd:02}/{gm:02}/{gy:04}\n").as_bytes());
            }
        }
        out
    }

    #[test]
    fn tabular_source_has_zero_offsets() {
        let table = CorrectionTable::from_bytes(&table_bytes(|_, _| 0)).unwrap();
        assert!(!table.is_uncorrected());
        assert!(table.entries().all(|e| e.day_offset == 0));
        assert_eq!(table.entries().count(), RECORD_COUNT);
    }

    #[test]
    fn offsets_are_read_per_record() {
        let bytes = table_bytes(|y, m| match (y, m) {
            (1420, 1) => 1,
            (1435, 7) => -1,
            (1459, 12) => 2,
            _ => 0,
        });
        let table = CorrectionTable::from_bytes(&bytes).unwrap();
        assert_eq!(table.offset_for(1420, 1), 1);
        assert_eq!(table.offset_for(1420, 2), 0);
        assert_eq!(table.offset_for(1435, 7), -1);
        assert_eq!(table.offset_for(1459, 12), 2);
    }

    #[test]
    fn zero_outside_window() {
        let table = CorrectionTable::from_bytes(&table_bytes(|_, _| 1)).unwrap();
        assert_eq!(table.offset_for(1419, 12), 0);
        assert_eq!(table.offset_for(1460, 1), 0);
        assert_eq!(table.offset_for(1445, 13), 0);
        assert_eq!(table.offset_for(1445, 0), 0);
        assert_eq!(table.offset_for(1445, 9), 1);
    }

    #[test]
    fn uncorrected_table_is_all_zero() {
        let table = CorrectionTable::uncorrected();
        assert!(table.is_uncorrected());
        assert_eq!(table.offset_for(1445, 9), 0);
        assert_eq!(table.entries().count(), 0);
    }

    #[test]
    fn rejects_short_input() {
        let mut bytes = table_bytes(|_, _| 0);
        bytes.pop();
        assert!(matches!(
            CorrectionTable::from_bytes(&bytes),
            Err(Error::MalformedTable(_))
        ));
    }

    #[test]
    fn rejects_non_numeric_field() {
        let mut bytes = table_bytes(|_, _| 0);
        bytes[RECORD_LEN * 3 + 7] = b'x';
        let err = CorrectionTable::from_bytes(&bytes).unwrap_err();
        assert_eq!(
            err,
            Error::MalformedTable("record 4: year is not numeric".into())
        );
    }

    #[test]
    fn rejects_implausible_offset() {
        let bytes = table_bytes(|y, m| if (y, m) == (1440, 6) { 30 } else { 0 });
        assert!(CorrectionTable::from_bytes(&bytes).is_err());
    }

    #[test]
    fn malformed_source_degrades_to_uncorrected() {
        let table = CorrectionTable::load_or_uncorrected(&b"garbage"[..]);
        assert!(table.is_uncorrected());
        let table = CorrectionTable::open_or_uncorrected("/nonexistent/umalqura.dat");
        assert!(table.is_uncorrected());
    }

    #[test]
    fn load_reads_from_any_reader() {
        let bytes = table_bytes(|_, m| if m == 3 { -1 } else { 0 });
        let table = CorrectionTable::load(std::io::Cursor::new(bytes)).unwrap();
        assert_eq!(table.offset_for(1441, 3), -1);
    }
}
