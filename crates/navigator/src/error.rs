//! Error types for the weeks-navigator crate.

use weeks_calendar::{CalendarError, Month};

/// Error type for all fallible operations in the weeks-navigator crate.
///
/// Input errors (`InvalidDateInput`, `InvalidDirection`, `UnknownMonthName`)
/// are raised before any state changes. The desync variants signal that the
/// working date and the loaded year calendar no longer agree; they indicate a
/// broken invariant rather than bad input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NavigatorError {
    /// Returned when a start date string cannot be parsed.
    #[error(
        "invalid date input {input:?}: expected \"today\", yyyy-mm-dd, or a textual date such as \"Mon Jul 10 2023\""
    )]
    InvalidDateInput {
        /// The unparseable input.
        input: String,
    },

    /// Returned when a direction string is neither forward nor backward.
    #[error("invalid direction {value:?}: expected \"forward\" (\"increment\") or \"backward\" (\"decrement\")")]
    InvalidDirection {
        /// The rejected value.
        value: String,
    },

    /// Returned when a month name matches no entry of the provider's month list.
    #[error("unknown month name: {name:?}")]
    UnknownMonthName {
        /// The name that could not be resolved.
        name: String,
    },

    /// Returned when the working date's year differs from the loaded calendar's.
    #[error("working date year {date_year} does not match loaded calendar year {calendar_year}")]
    YearMismatch {
        /// Year held by the working date.
        date_year: i32,
        /// Year of the loaded calendar.
        calendar_year: i32,
    },

    /// Returned when the working date's month is absent from the loaded calendar.
    #[error("month {month} not found in calendar for {year}")]
    MonthNotFound {
        /// Month that was searched for.
        month: Month,
        /// Year of the loaded calendar.
        year: i32,
    },

    /// Returned when the working date's day is absent from its month.
    #[error("day {day} not found in {month} {year}")]
    DayNotFound {
        /// Day that was searched for.
        day: u8,
        /// Month that was searched.
        month: Month,
        /// Year of the loaded calendar.
        year: i32,
    },

    /// Returned when a step would cross past the first or last representable year.
    #[error("cannot step beyond year {year}")]
    YearOutOfRange {
        /// Year the step started from.
        year: i32,
    },

    /// Wraps a calendar error.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
