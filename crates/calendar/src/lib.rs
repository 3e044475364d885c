//! # weeks-calendar
//!
//! Gregorian year calendars: every day of a year with the weekday it falls on.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["year: i32"] -->|"Gregorian::full_calendar_year()"| B["YearCalendar"]
//!     B -->|".month(i)"| C["MonthEntry"]
//!     C -->|".day(j)"| D["DayRecord { day, weekday }"]
//!     E["MONTHS"] -->|"months_list()"| F["MonthName { name, short_name }"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use weeks_calendar::{CalendarYearProvider, Gregorian, Month, Weekday};
//!
//! let cal = Gregorian.full_calendar_year(2024);
//! let feb = cal.entry(Month::February).unwrap();
//! assert_eq!(feb.len(), 29);
//! assert_eq!(feb.last().unwrap().weekday, Weekday::Thursday);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `weekday` | Weekday enum and name parsing |
//! | `month` | Month enum and the canonical month-name list |
//! | `year` | Day records, month entries, year calendars |
//! | `gregorian` | Leap-year and weekday arithmetic, default provider |
//! | `provider` | The `CalendarYearProvider` trait |
//! | `error` | Error types |

mod error;
mod gregorian;
mod month;
mod provider;
mod weekday;
mod year;

pub use error::CalendarError;
pub use gregorian::{Gregorian, days_in_month, is_leap_year, weekday_of};
pub use month::{MONTHS, Month, MonthName};
pub use provider::CalendarYearProvider;
pub use weekday::Weekday;
pub use year::{DayRecord, MonthEntry, YearCalendar};
