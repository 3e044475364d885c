//! Day records and the per-year calendar structure.

use serde::Serialize;

use crate::month::Month;
use crate::weekday::Weekday;

/// One day of a month: its day number and the weekday it falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DayRecord {
    /// Day within the month (1..=31).
    pub day: u8,
    /// Weekday the day falls on.
    pub weekday: Weekday,
}

/// All days of one month, in calendar order (index 0 = day 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthEntry {
    month: Month,
    days: Vec<DayRecord>,
}

impl MonthEntry {
    /// Wraps the day records of `month`, as a custom provider would build them.
    ///
    /// The records are taken as given; a navigator checks them when it moves.
    pub fn new(month: Month, days: Vec<DayRecord>) -> Self {
        Self { month, days }
    }

    /// Returns the month this entry describes.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Returns the long month name this entry is keyed by.
    pub fn name(&self) -> &'static str {
        self.month.name()
    }

    /// Returns the day records in calendar order.
    pub fn days(&self) -> &[DayRecord] {
        &self.days
    }

    /// Returns the day record at a 0-based index, if any.
    pub fn day(&self, index: usize) -> Option<&DayRecord> {
        self.days.get(index)
    }

    /// Returns the number of days in the month.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns `true` if the month holds no days.
    ///
    /// Never the case for entries produced by a provider.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Returns the last day record of the month.
    pub fn last(&self) -> Option<&DayRecord> {
        self.days.last()
    }
}

/// The full set of day records for one Gregorian year.
///
/// Holds twelve [`MonthEntry`] values in calendar order when built by
/// [`Gregorian`](crate::Gregorian). Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearCalendar {
    year: i32,
    months: Vec<MonthEntry>,
}

impl YearCalendar {
    /// Builds a calendar for `year` from month entries in calendar order.
    pub fn new(year: i32, months: Vec<MonthEntry>) -> Self {
        Self { year, months }
    }

    /// Returns the year this calendar covers.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month entries in calendar order.
    pub fn months(&self) -> &[MonthEntry] {
        &self.months
    }

    /// Returns the month entry at a 0-based index (0 = January), if any.
    pub fn month(&self, index: usize) -> Option<&MonthEntry> {
        self.months.get(index)
    }

    /// Returns the entry for a given month.
    pub fn entry(&self, month: Month) -> Option<&MonthEntry> {
        self.months.iter().find(|m| m.month == month)
    }

    /// Returns the total number of days in the year (365 or 366).
    pub fn day_count(&self) -> usize {
        self.months.iter().map(MonthEntry::len).sum()
    }

    /// Iterates over every day of the year in calendar order.
    pub fn iter_days(&self) -> impl Iterator<Item = (Month, &DayRecord)> + '_ {
        self.months
            .iter()
            .flat_map(|m| m.days.iter().map(move |d| (m.month, d)))
    }
}
