//! Single-day moves with month-end and year-end rollover.

use tracing::{debug, trace};
use weeks_calendar::{CalendarYearProvider, MONTHS, MonthEntry};

use crate::cursor::Cursor;
use crate::error::NavigatorError;
use crate::index::Indices;
use crate::week::Direction;

/// Advances the cursor by exactly one day.
///
/// Rolls over to the first day of the next month at month end, and to
/// January 1 of the next year after December 31, loading that year's calendar
/// from `provider`.
///
/// # Errors
///
/// Fails with [`NavigatorError::YearOutOfRange`] past December 31 of
/// `i32::MAX`, or if the provider's calendar breaks the cursor invariant. The
/// cursor is unchanged in either case.
pub fn step_forward<P>(cursor: &mut Cursor, provider: &P) -> Result<(), NavigatorError>
where
    P: CalendarYearProvider + ?Sized,
{
    let Indices { month, day } = cursor.indices();
    let year = cursor.date().year;
    if day + 1 < cursor.month_len() {
        cursor.move_to(year, Indices { month, day: day + 1 }, None)?;
    } else if month + 1 < MONTHS.len() {
        cursor.move_to(year, Indices { month: month + 1, day: 0 }, None)?;
    } else {
        let next = year
            .checked_add(1)
            .ok_or(NavigatorError::YearOutOfRange { year })?;
        debug!(year = next, "loading next year calendar");
        let calendar = provider.full_calendar_year(next);
        cursor.move_to(next, Indices::default(), Some(calendar))?;
    }
    trace!(date = %cursor.date(), "stepped forward");
    Ok(())
}

/// Moves the cursor back by exactly one day.
///
/// Rolls over to the last day of the previous month at month start, and to
/// December 31 of the previous year before January 1, loading that year's
/// calendar from `provider`.
///
/// # Errors
///
/// Fails with [`NavigatorError::YearOutOfRange`] before January 1 of
/// `i32::MIN`, or if the provider's calendar breaks the cursor invariant. The
/// cursor is unchanged in either case.
pub fn step_backward<P>(cursor: &mut Cursor, provider: &P) -> Result<(), NavigatorError>
where
    P: CalendarYearProvider + ?Sized,
{
    let Indices { month, day } = cursor.indices();
    let year = cursor.date().year;
    if day > 0 {
        cursor.move_to(year, Indices { month, day: day - 1 }, None)?;
    } else if month > 0 {
        let day = last_index(cursor.calendar().month(month - 1));
        cursor.move_to(year, Indices { month: month - 1, day }, None)?;
    } else {
        let previous = year
            .checked_sub(1)
            .ok_or(NavigatorError::YearOutOfRange { year })?;
        debug!(year = previous, "loading previous year calendar");
        let calendar = provider.full_calendar_year(previous);
        let month = MONTHS.len() - 1;
        let day = last_index(calendar.month(month));
        cursor.move_to(previous, Indices { month, day }, Some(calendar))?;
    }
    trace!(date = %cursor.date(), "stepped backward");
    Ok(())
}

/// Moves the cursor one day in `direction`.
pub fn step<P>(cursor: &mut Cursor, provider: &P, direction: Direction) -> Result<(), NavigatorError>
where
    P: CalendarYearProvider + ?Sized,
{
    match direction {
        Direction::Forward => step_forward(cursor, provider),
        Direction::Backward => step_backward(cursor, provider),
    }
}

/// Moves the cursor `n` days in `direction`.
///
/// Stops at the first failing step, so on error the cursor may have moved
/// part of the way.
pub fn step_days<P>(
    cursor: &mut Cursor,
    provider: &P,
    direction: Direction,
    n: usize,
) -> Result<(), NavigatorError>
where
    P: CalendarYearProvider + ?Sized,
{
    for _ in 0..n {
        step(cursor, provider, direction)?;
    }
    Ok(())
}

fn last_index(month: Option<&MonthEntry>) -> usize {
    month.map_or(0, |m| m.len().saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use weeks_calendar::{Gregorian, Month, Weekday};

    use crate::date::CalendarDate;

    fn cursor(year: i32, month: Month, day: u8) -> Cursor {
        Cursor::locate(CalendarDate::new(Weekday::Sunday, day, month, year), &Gregorian).unwrap()
    }

    fn ymd(c: &Cursor) -> (i32, Month, u8) {
        (c.date().year, c.date().month, c.date().day)
    }

    #[test]
    fn forward_within_month() {
        let mut c = cursor(2023, Month::July, 10);
        step_forward(&mut c, &Gregorian).unwrap();
        assert_eq!(ymd(&c), (2023, Month::July, 11));
        assert_eq!(c.date().weekday, Weekday::Tuesday);
    }

    #[test]
    fn forward_month_end() {
        let mut c = cursor(2023, Month::April, 30);
        step_forward(&mut c, &Gregorian).unwrap();
        assert_eq!(ymd(&c), (2023, Month::May, 1));
        assert_eq!(c.indices(), Indices { month: 4, day: 0 });
    }

    #[test]
    fn forward_leap_february() {
        let mut c = cursor(2024, Month::February, 28);
        step_days(&mut c, &Gregorian, Direction::Forward, 3).unwrap();
        assert_eq!(ymd(&c), (2024, Month::March, 2));
    }

    #[test]
    fn forward_common_february() {
        let mut c = cursor(2023, Month::February, 28);
        step_forward(&mut c, &Gregorian).unwrap();
        assert_eq!(ymd(&c), (2023, Month::March, 1));
    }

    #[test]
    fn forward_year_end() {
        let mut c = cursor(2023, Month::December, 31);
        step_forward(&mut c, &Gregorian).unwrap();
        assert_eq!(ymd(&c), (2024, Month::January, 1));
        assert_eq!(c.calendar().year(), 2024);
        assert_eq!(c.date().weekday, Weekday::Monday);
    }

    #[test]
    fn backward_within_month() {
        let mut c = cursor(2023, Month::July, 10);
        step_backward(&mut c, &Gregorian).unwrap();
        assert_eq!(ymd(&c), (2023, Month::July, 9));
        assert_eq!(c.date().weekday, Weekday::Sunday);
    }

    #[test]
    fn backward_month_start() {
        let mut c = cursor(2024, Month::March, 1);
        step_backward(&mut c, &Gregorian).unwrap();
        assert_eq!(ymd(&c), (2024, Month::February, 29));

        let mut c = cursor(2023, Month::March, 1);
        step_backward(&mut c, &Gregorian).unwrap();
        assert_eq!(ymd(&c), (2023, Month::February, 28));
    }

    #[test]
    fn backward_year_start() {
        let mut c = cursor(2024, Month::January, 1);
        step_backward(&mut c, &Gregorian).unwrap();
        assert_eq!(ymd(&c), (2023, Month::December, 31));
        assert_eq!(c.indices(), Indices { month: 11, day: 30 });
        assert_eq!(c.calendar().year(), 2023);
    }

    #[test]
    fn backward_into_leap_year_end() {
        let mut c = cursor(2025, Month::March, 1);
        step_days(&mut c, &Gregorian, Direction::Backward, 365).unwrap();
        assert_eq!(ymd(&c), (2024, Month::March, 1));
    }

    #[test]
    fn forward_past_last_year_fails() {
        let mut c = cursor(i32::MAX, Month::December, 31);
        let before = c.clone();
        assert_eq!(
            step_forward(&mut c, &Gregorian).unwrap_err(),
            NavigatorError::YearOutOfRange { year: i32::MAX }
        );
        assert_eq!(c, before);
    }

    #[test]
    fn backward_past_first_year_fails() {
        let mut c = cursor(i32::MIN, Month::January, 1);
        let before = c.clone();
        assert_eq!(
            step_backward(&mut c, &Gregorian).unwrap_err(),
            NavigatorError::YearOutOfRange { year: i32::MIN }
        );
        assert_eq!(c, before);
    }

    #[test]
    fn extreme_years_still_step_inside_the_year() {
        let mut c = cursor(i32::MAX, Month::December, 30);
        step_forward(&mut c, &Gregorian).unwrap();
        assert_eq!(ymd(&c), (i32::MAX, Month::December, 31));
        assert_eq!(c.date().weekday, Weekday::Tuesday);

        let mut c = cursor(i32::MIN, Month::January, 2);
        step_backward(&mut c, &Gregorian).unwrap();
        assert_eq!(ymd(&c), (i32::MIN, Month::January, 1));
        assert_eq!(c.date().weekday, Weekday::Tuesday);
    }

    #[test]
    fn forward_then_backward_is_identity() {
        let start = cursor(2023, Month::December, 28);
        let mut c = start.clone();
        step_days(&mut c, &Gregorian, Direction::Forward, 40).unwrap();
        step_days(&mut c, &Gregorian, Direction::Backward, 40).unwrap();
        assert_eq!(c, start);
    }
}
