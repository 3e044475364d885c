//! Months of the year and the canonical month-name list.

use std::fmt;

use serde::Serialize;

use crate::error::CalendarError;

/// A month of the Gregorian year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

/// Long and short name of one month, as listed by a calendar provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MonthName {
    /// The month this entry names.
    pub month: Month,
    /// Long English name, e.g. `"February"`.
    pub name: &'static str,
    /// Three-letter English name, e.g. `"Feb"`.
    pub short_name: &'static str,
}

/// All months in calendar order with their long and short names.
pub const MONTHS: [MonthName; 12] = [
    MonthName { month: Month::January, name: "January", short_name: "Jan" },
    MonthName { month: Month::February, name: "February", short_name: "Feb" },
    MonthName { month: Month::March, name: "March", short_name: "Mar" },
    MonthName { month: Month::April, name: "April", short_name: "Apr" },
    MonthName { month: Month::May, name: "May", short_name: "May" },
    MonthName { month: Month::June, name: "June", short_name: "Jun" },
    MonthName { month: Month::July, name: "July", short_name: "Jul" },
    MonthName { month: Month::August, name: "August", short_name: "Aug" },
    MonthName { month: Month::September, name: "September", short_name: "Sep" },
    MonthName { month: Month::October, name: "October", short_name: "Oct" },
    MonthName { month: Month::November, name: "November", short_name: "Nov" },
    MonthName { month: Month::December, name: "December", short_name: "Dec" },
];

/// Number of days in each month of a common year (index 0 = January).
pub(crate) const COMMON_YEAR_DAYS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

impl Month {
    /// Returns the month for a 0-based index (0 = January).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `index` is not in 0..=11.
    pub fn from_index(index: usize) -> Result<Self, CalendarError> {
        MONTHS
            .get(index)
            .map(|m| m.month)
            .ok_or(CalendarError::InvalidMonth {
                month: u8::try_from(index + 1).unwrap_or(u8::MAX),
            })
    }

    /// Returns the month for a 1-based month number (1 = January).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `number` is not in 1..=12.
    pub fn from_number(number: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&number) {
            return Err(CalendarError::InvalidMonth { month: number });
        }
        Self::from_index(usize::from(number - 1))
    }

    /// Returns the 0-based index (0 = January).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the 1-based month number (1 = January).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the long English name, e.g. `"July"`.
    pub const fn name(self) -> &'static str {
        MONTHS[self.index()].name
    }

    /// Returns the three-letter English name, e.g. `"Jul"`.
    pub const fn short_name(self) -> &'static str {
        MONTHS[self.index()].short_name
    }

    /// Returns the following month, wrapping December to January.
    pub const fn next(self) -> Self {
        MONTHS[(self.index() + 1) % 12].month
    }

    /// Returns the preceding month, wrapping January to December.
    pub const fn previous(self) -> Self {
        MONTHS[(self.index() + 11) % 12].month
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
