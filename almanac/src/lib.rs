//! # almanac
//!
//! Multi-calendar date conversion: proleptic Gregorian, Hijri with the
//! Umm al-Qura correction table, and the Indian National Civil (Saka)
//! calendar, all pivoting through Julian Day Numbers, plus the Easter
//! computus and its moving feasts.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//!
//! ## Quick start
//!
//! ```rust
//! use almanac::time::{easter_sunday, CorrectionTable, HijriReckoning, Month, MonthDay};
//! use almanac::time::hijri::hijri_to_gregorian;
//!
//! // Load the civil-authority table once; an unreadable source means no
//! // correction.
//! let table = CorrectionTable::open_or_uncorrected("umalqura.dat");
//!
//! let ramadan = hijri_to_gregorian(&table, 1445, 9, 1, HijriReckoning::UmmAlQura).unwrap();
//! assert_eq!(ramadan, (2024, 3, 11));
//!
//! assert_eq!(easter_sunday(2024), MonthDay::new(Month::March, 31));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and primitive aliases.
pub use almanac_core as core;

/// Calendar conversions and moving feasts.
pub use almanac_time as time;
