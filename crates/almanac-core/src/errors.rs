//! Error types for the almanac crates.
//!
//! Every conversion reports failure through the single `thiserror`-derived
//! [`Error`] enum.  The `ensure!` macro covers ad-hoc contract
//! checks that do not warrant a dedicated variant.

use crate::{DayNumber, MonthNumber, Year};
use thiserror::Error;

/// The top-level error type used throughout almanac.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Month outside `[1, 12]`.
    #[error("month {month} out of range [1, 12]")]
    InvalidMonth {
        /// The month that was provided.
        month: MonthNumber,
    },

    /// Day outside the valid range of its month.
    #[error("day {day} out of range [1, {max_day}] for {year}-{month:02}")]
    InvalidDay {
        /// Year of the rejected date.
        year: Year,
        /// Month of the rejected date.
        month: MonthNumber,
        /// The day that was provided.
        day: DayNumber,
        /// Number of days in that month.
        max_day: DayNumber,
    },

    /// Year outside the range an operation supports (`min` inclusive, `max`
    /// exclusive).
    #[error("year {year} outside supported range [{min}, {max})")]
    UnsupportedYear {
        /// The year that was provided.
        year: Year,
        /// First supported year.
        min: Year,
        /// First unsupported year past the range.
        max: Year,
    },

    /// Julian day number outside the span a calendar can decode.
    #[error("julian day {jdn} outside decodable range [{min}, {max}]")]
    JdnOutOfRange {
        /// The Julian day number that was provided.
        jdn: i64,
        /// Smallest Julian day number the calendar can decode.
        min: i64,
        /// Largest Julian day number the calendar can decode.
        max: i64,
    },

    /// The correction table source could not be parsed.
    #[error("malformed correction table: {0}")]
    MalformedTable(String),

    /// Reading a table source failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// Shorthand `Result` type used throughout almanac.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use almanac_core::{ensure, errors::Error};
/// fn positive(x: i32) -> almanac_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
