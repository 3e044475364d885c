//! Days of the week.

use std::fmt;

use serde::Serialize;

use crate::error::CalendarError;

/// A day of the week.
///
/// Variants are ordered Sunday first, matching the cycle a year calendar
/// walks through (Sunday → Saturday → Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All weekdays, Sunday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// All weekdays, Monday first (ISO week order).
    pub const MONDAY_FIRST: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Returns the weekday `n` days after Sunday, wrapping modulo 7.
    pub const fn from_days_from_sunday(n: u8) -> Self {
        Self::ALL[(n % 7) as usize]
    }

    /// Returns the number of days since the preceding Sunday (Sunday = 0).
    pub const fn num_days_from_sunday(self) -> u8 {
        self as u8
    }

    /// Returns the following weekday.
    pub const fn next(self) -> Self {
        Self::from_days_from_sunday(self.num_days_from_sunday() + 1)
    }

    /// Returns the preceding weekday.
    pub const fn previous(self) -> Self {
        Self::from_days_from_sunday(self.num_days_from_sunday() + 6)
    }

    /// Returns the long English name, e.g. `"Monday"`.
    pub const fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    /// Returns the three-letter English name, e.g. `"Mon"`.
    pub const fn short_name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sun",
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
        }
    }

    /// Parses a long or three-letter weekday name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnknownWeekdayName`] if `name` matches no weekday.
    pub fn from_name(name: &str) -> Result<Self, CalendarError> {
        Self::ALL
            .into_iter()
            .find(|w| {
                w.name().eq_ignore_ascii_case(name) || w.short_name().eq_ignore_ascii_case(name)
            })
            .ok_or_else(|| CalendarError::UnknownWeekdayName {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
