//! Proleptic Gregorian calendar arithmetic and the default provider.

use crate::error::CalendarError;
use crate::month::{COMMON_YEAR_DAYS, MONTHS, Month, MonthName};
use crate::provider::CalendarYearProvider;
use crate::weekday::Weekday;
use crate::year::{DayRecord, MonthEntry, YearCalendar};

/// Returns `true` if `year` is a leap year.
///
/// A year is a leap year when it is divisible by 4, except for century years,
/// which must also be divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `month` of `year` (28..=31).
pub fn days_in_month(year: i32, month: Month) -> u8 {
    if month == Month::February && is_leap_year(year) {
        29
    } else {
        COMMON_YEAR_DAYS[month.index()]
    }
}

/// Days from 1970-01-01 to the given civil date (negative before the epoch).
fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = y - era * 400;
    let m = i64::from(month);
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Returns the weekday of a Gregorian date.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDay`] if `day` does not exist in `month`
/// of `year`.
pub fn weekday_of(year: i32, month: Month, day: u8) -> Result<Weekday, CalendarError> {
    let max_day = days_in_month(year, month);
    if !(1..=max_day).contains(&day) {
        return Err(CalendarError::InvalidDay {
            day,
            month: month.number(),
            year,
            max_day,
        });
    }
    // 1970-01-01 was a Thursday.
    let n = (days_from_civil(year, month.number(), day) + 4).rem_euclid(7);
    Ok(Weekday::from_days_from_sunday(n as u8))
}

/// Generates [`YearCalendar`]s using the proleptic Gregorian rules.
///
/// Stateless; every call to [`full_calendar_year`](CalendarYearProvider::full_calendar_year)
/// builds a fresh calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gregorian;

impl CalendarYearProvider for Gregorian {
    fn full_calendar_year(&self, year: i32) -> YearCalendar {
        let mut weekday = Weekday::from_days_from_sunday(
            (days_from_civil(year, 1, 1) + 4).rem_euclid(7) as u8,
        );
        let months = MONTHS
            .iter()
            .map(|m| {
                let days = (1..=days_in_month(year, m.month))
                    .map(|day| {
                        let record = DayRecord { day, weekday };
                        weekday = weekday.next();
                        record
                    })
                    .collect();
                MonthEntry::new(m.month, days)
            })
            .collect();
        YearCalendar::new(year, months)
    }

    fn months_list(&self) -> &[MonthName] {
        &MONTHS
    }
}
