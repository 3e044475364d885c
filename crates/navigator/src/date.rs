//! Calendar dates and the textual forms a navigator can start from.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use weeks_calendar::{CalendarYearProvider, Month, Weekday};

use crate::error::NavigatorError;
use crate::index::resolve_month;

/// One point on the Gregorian calendar.
///
/// Inside a navigator the `weekday` field is always rewritten from the loaded
/// year calendar after the date moves; it is never trusted on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarDate {
    pub weekday: Weekday,
    pub day: u8,
    pub month: Month,
    pub year: i32,
}

impl CalendarDate {
    pub fn new(weekday: Weekday, day: u8, month: Month, year: i32) -> Self {
        Self {
            weekday,
            day,
            month,
            year,
        }
    }

    /// Returns `true` if both dates name the same day, month and year.
    pub fn same_day(&self, other: &CalendarDate) -> bool {
        (self.day, self.month, self.year) == (other.day, other.month, other.year)
    }

    fn from_naive(date: NaiveDate) -> Result<Self, NavigatorError> {
        Ok(Self {
            weekday: Weekday::from_days_from_sunday(date.weekday().num_days_from_sunday() as u8),
            day: date.day() as u8,
            month: Month::from_number(date.month() as u8)?,
            year: date.year(),
        })
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.weekday, self.day, self.month, self.year)
    }
}

/// Where a navigator starts.
///
/// Parsed from one of:
/// - `today` — the current local date
/// - `yyyy-mm-dd` — an ISO calendar date
/// - `Mon Jul 10 2023` — weekday, month (short or long name), day, year
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    Today,
    Iso(NaiveDate),
    Textual {
        weekday: Weekday,
        month: String,
        day: u8,
        year: i32,
    },
}

impl DateInput {
    /// Turns the input into an unsynchronised date.
    ///
    /// Month names are resolved through the provider's month list. The
    /// resulting date has not been checked against a year calendar yet.
    pub(crate) fn seed<P>(&self, provider: &P) -> Result<CalendarDate, NavigatorError>
    where
        P: CalendarYearProvider + ?Sized,
    {
        match self {
            DateInput::Today => CalendarDate::from_naive(Local::now().date_naive()),
            DateInput::Iso(date) => CalendarDate::from_naive(*date),
            DateInput::Textual {
                weekday,
                month,
                day,
                year,
            } => Ok(CalendarDate::new(
                *weekday,
                *day,
                resolve_month(month, provider.months_list())?,
                *year,
            )),
        }
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Iso(date)
    }
}

impl FromStr for DateInput {
    type Err = NavigatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("today") {
            return Ok(DateInput::Today);
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(DateInput::Iso(date));
        }

        let invalid = || NavigatorError::InvalidDateInput {
            input: s.to_string(),
        };
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let [weekday, month, day, year] = tokens.as_slice() else {
            return Err(invalid());
        };
        Ok(DateInput::Textual {
            weekday: Weekday::from_name(weekday).map_err(|_| invalid())?,
            month: (*month).to_string(),
            day: day.parse().map_err(|_| invalid())?,
            year: year.parse().map_err(|_| invalid())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weeks_calendar::Gregorian;

    #[test]
    fn parse_today_any_case() {
        assert_eq!("today".parse::<DateInput>().unwrap(), DateInput::Today);
        assert_eq!(" Today ".parse::<DateInput>().unwrap(), DateInput::Today);
    }

    #[test]
    fn parse_iso() {
        let input: DateInput = "2023-07-10".parse().unwrap();
        assert_eq!(
            input,
            DateInput::Iso(NaiveDate::from_ymd_opt(2023, 7, 10).unwrap())
        );
    }

    #[test]
    fn parse_textual() {
        let input: DateInput = "Mon Jul 10 2023".parse().unwrap();
        assert_eq!(
            input,
            DateInput::Textual {
                weekday: Weekday::Monday,
                month: "Jul".into(),
                day: 10,
                year: 2023,
            }
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["", "2023-13-01", "2023-02-30", "July 10", "Xyz Jul 10 2023", "Mon Jul ten 2023"] {
            assert!(
                matches!(
                    bad.parse::<DateInput>(),
                    Err(NavigatorError::InvalidDateInput { .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn seed_iso_uses_calendar_fields() {
        let date = DateInput::Iso(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
            .seed(&Gregorian)
            .unwrap();
        assert_eq!(date, CalendarDate::new(Weekday::Thursday, 29, Month::February, 2024));
    }

    #[test]
    fn seed_textual_resolves_short_month() {
        let date = "Tue Feb 27 2024"
            .parse::<DateInput>()
            .unwrap()
            .seed(&Gregorian)
            .unwrap();
        assert_eq!(date.month, Month::February);
        assert_eq!(date.day, 27);
    }

    #[test]
    fn seed_textual_unknown_month() {
        let err = "Mon Foo 10 2023"
            .parse::<DateInput>()
            .unwrap()
            .seed(&Gregorian)
            .unwrap_err();
        assert_eq!(err, NavigatorError::UnknownMonthName { name: "Foo".into() });
    }

    #[test]
    fn same_day_ignores_weekday() {
        let a = CalendarDate::new(Weekday::Monday, 10, Month::July, 2023);
        let b = CalendarDate::new(Weekday::Friday, 10, Month::July, 2023);
        let c = CalendarDate::new(Weekday::Monday, 10, Month::August, 2023);
        assert!(a.same_day(&b));
        assert!(!a.same_day(&c));
    }

    #[test]
    fn display() {
        let d = CalendarDate::new(Weekday::Monday, 10, Month::July, 2023);
        assert_eq!(d.to_string(), "Monday 10 July 2023");
    }
}
