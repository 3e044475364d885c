//! Index cache tying a working date to its position in a year calendar.

use serde::Serialize;
use weeks_calendar::{Month, MonthName, YearCalendar};

use crate::date::CalendarDate;
use crate::error::NavigatorError;

/// Position of a date inside a [`YearCalendar`].
///
/// `month` indexes [`YearCalendar::months`] (0 = January) and `day` indexes
/// that month's day records (0 = the 1st).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Indices {
    pub month: usize,
    pub day: usize,
}

/// Resolves a long or three-letter month name through a provider's month list.
///
/// Matching ignores ASCII case.
///
/// # Errors
///
/// Returns [`NavigatorError::UnknownMonthName`] if nothing in `months` matches.
pub fn resolve_month(name: &str, months: &[MonthName]) -> Result<Month, NavigatorError> {
    let by_short = name.len() == 3;
    months
        .iter()
        .find(|m| {
            let candidate = if by_short { m.short_name } else { m.name };
            candidate.eq_ignore_ascii_case(name)
        })
        .map(|m| m.month)
        .ok_or_else(|| NavigatorError::UnknownMonthName {
            name: name.to_string(),
        })
}

/// Locates `date` inside `calendar` and refreshes its weekday.
///
/// Scans the months in order until the month matches, then that month's days
/// until the day number matches. The weekday of the matched record is copied
/// onto `date`.
///
/// # Errors
///
/// Returns [`NavigatorError::YearMismatch`], [`NavigatorError::MonthNotFound`]
/// or [`NavigatorError::DayNotFound`] when `date` does not exist in
/// `calendar`. `date` is left untouched in that case.
pub fn resync(date: &mut CalendarDate, calendar: &YearCalendar) -> Result<Indices, NavigatorError> {
    if date.year != calendar.year() {
        return Err(NavigatorError::YearMismatch {
            date_year: date.year,
            calendar_year: calendar.year(),
        });
    }
    let (month_index, entry) = calendar
        .months()
        .iter()
        .enumerate()
        .find(|(_, m)| m.month() == date.month)
        .ok_or(NavigatorError::MonthNotFound {
            month: date.month,
            year: date.year,
        })?;
    let (day_index, record) = entry
        .days()
        .iter()
        .enumerate()
        .find(|(_, d)| d.day == date.day)
        .ok_or(NavigatorError::DayNotFound {
            day: date.day,
            month: date.month,
            year: date.year,
        })?;

    date.weekday = record.weekday;
    Ok(Indices {
        month: month_index,
        day: day_index,
    })
}
