//! The working-date cursor: a date, its indices, and the loaded year.

use weeks_calendar::{CalendarYearProvider, Month, MonthEntry, Weekday, YearCalendar};

use crate::date::CalendarDate;
use crate::error::NavigatorError;
use crate::index::{Indices, resync};

/// A working date pinned inside the year calendar it belongs to.
///
/// Between operations the cursor always satisfies: the month entry at
/// `indices.month` is `date.month`, and the day record at `indices.day` holds
/// `date.day` and `date.weekday`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    date: CalendarDate,
    indices: Indices,
    calendar: YearCalendar,
}

impl Cursor {
    /// Loads the calendar for `date.year` and pins `date` inside it.
    ///
    /// # Errors
    ///
    /// Fails if the date does not exist in that year (see [`resync`]).
    pub fn locate<P>(date: CalendarDate, provider: &P) -> Result<Self, NavigatorError>
    where
        P: CalendarYearProvider + ?Sized,
    {
        Self::with_calendar(date, provider.full_calendar_year(date.year))
    }

    /// Pins `date` inside an already loaded calendar.
    ///
    /// # Errors
    ///
    /// Fails if the date does not exist in `calendar` (see [`resync`]).
    pub fn with_calendar(
        mut date: CalendarDate,
        calendar: YearCalendar,
    ) -> Result<Self, NavigatorError> {
        let indices = resync(&mut date, &calendar)?;
        Ok(Self {
            date,
            indices,
            calendar,
        })
    }

    pub fn date(&self) -> &CalendarDate {
        &self.date
    }

    pub fn indices(&self) -> Indices {
        self.indices
    }

    pub fn calendar(&self) -> &YearCalendar {
        &self.calendar
    }

    fn current_month(&self) -> &MonthEntry {
        &self.calendar.months()[self.indices.month]
    }

    /// Number of days in the month at the cached month index.
    pub fn month_len(&self) -> usize {
        self.current_month().len()
    }

    /// Day number of the last day in the month at the cached month index.
    pub fn last_day_of_month(&self) -> u8 {
        self.current_month().last().map_or(0, |d| d.day)
    }

    /// Month at the cached month index.
    pub fn month_from_index(&self) -> Month {
        self.current_month().month()
    }

    /// Day number at the cached indices.
    pub fn day_from_index(&self) -> u8 {
        self.current_month().days()[self.indices.day].day
    }

    /// Weekday at the cached indices.
    pub fn weekday_from_index(&self) -> Weekday {
        self.current_month().days()[self.indices.day].weekday
    }

    /// Moves to `indices` of `year`, inside `reload` when a new year's
    /// calendar was loaded and inside the current calendar otherwise.
    ///
    /// Day and month are read back from the target calendar and the result is
    /// resynced before anything is committed, so a failed move leaves the
    /// cursor unchanged.
    pub(crate) fn move_to(
        &mut self,
        year: i32,
        indices: Indices,
        reload: Option<YearCalendar>,
    ) -> Result<(), NavigatorError> {
        let calendar = reload.as_ref().unwrap_or(&self.calendar);
        let mut date = self.date;
        date.year = year;

        let Some(entry) = calendar.month(indices.month) else {
            return Err(NavigatorError::MonthNotFound {
                month: Month::from_index(indices.month)?,
                year,
            });
        };
        date.month = entry.month();
        date.day = entry
            .day(indices.day)
            .ok_or(NavigatorError::DayNotFound {
                day: u8::try_from(indices.day + 1).unwrap_or(u8::MAX),
                month: date.month,
                year,
            })?
            .day;

        let resolved = resync(&mut date, calendar)?;
        if let Some(calendar) = reload {
            self.calendar = calendar;
        }
        self.date = date;
        self.indices = resolved;
        Ok(())
    }
}
