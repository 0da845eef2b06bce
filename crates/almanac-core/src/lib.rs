//! # almanac-core
//!
//! Error definitions and primitive type aliases shared by the almanac
//! calendar crates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A calendar year number.
///
/// Gregorian years use astronomical numbering (1 BC is `0`).  Hijri and Saka
/// years count from their own epochs.
pub type Year = i32;

/// A month number within a year (1–12 in every supported calendar).
pub type MonthNumber = u8;

/// A day number within a month (1–31).
pub type DayNumber = u8;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
