//! The calendar provider capability consumed by navigators.

use crate::month::MonthName;
use crate::year::YearCalendar;

/// Source of year calendars and month names.
///
/// Implementations must be pure: the same year always yields the same
/// calendar, and every representable year is supported.
pub trait CalendarYearProvider {
    /// Builds the full calendar for `year`.
    fn full_calendar_year(&self, year: i32) -> YearCalendar;

    /// Returns the ordered list of month names (January first).
    fn months_list(&self) -> &[MonthName];
}

impl<P: CalendarYearProvider + ?Sized> CalendarYearProvider for &P {
    fn full_calendar_year(&self, year: i32) -> YearCalendar {
        (**self).full_calendar_year(year)
    }

    fn months_list(&self) -> &[MonthName] {
        (**self).months_list()
    }
}
