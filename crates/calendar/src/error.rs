//! Error types for the weeks-calendar crate.

/// Error type for all fallible operations in the weeks-calendar crate.
///
/// This enum covers validation failures for month numbers, day-within-month
/// values, and textual weekday names.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} of {year} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year the month belongs to.
        year: i32,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when a weekday name matches neither a long nor a short name.
    #[error("unknown weekday name: {name:?}")]
    UnknownWeekdayName {
        /// The name that could not be matched.
        name: String,
    },
}
