//! # weeks-navigator
//!
//! Week-by-week navigation over Gregorian year calendars.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["WeeksNavigator"] -->|"increment/decrement/reset"| B["build_week()"]
//!     A -->|"7 × step"| C["step_forward() / step_backward()"]
//!     B -->|"align + 6 × step"| C
//!     C -->|"move_to()"| D["Cursor"]
//!     D -->|"resync()"| E["Indices"]
//!     C -->|"year crossing"| F["CalendarYearProvider"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use weeks_navigator::WeeksNavigator;
//! use weeks_calendar::Weekday;
//!
//! let mut nav = WeeksNavigator::new("2023-12-31").unwrap();
//! assert_eq!(nav.week().get(Weekday::Monday).unwrap().day, 25);
//!
//! let next = nav.increment_week().unwrap();
//! assert_eq!(next.get(Weekday::Monday).unwrap().year, 2024);
//!
//! nav.reset_week().unwrap();
//! assert_eq!(nav.week().start_entry().unwrap().0, Weekday::Sunday);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Calendar dates and start-date parsing |
//! | `index` | Index cache and month-name resolution |
//! | `cursor` | Working date pinned inside a year calendar |
//! | `stepper` | One-day moves with month and year rollover |
//! | `week` | Week windows and the week builder |
//! | `navigator` | The public `WeeksNavigator` |
//! | `config` | Navigator configuration |
//! | `error` | Error types |

mod config;
mod cursor;
mod date;
mod error;
mod index;
mod navigator;
mod stepper;
mod week;

pub use config::{NavigatorConfig, StartMatch};
pub use cursor::Cursor;
pub use date::{CalendarDate, DateInput};
pub use error::NavigatorError;
pub use index::{Indices, resolve_month, resync};
pub use navigator::WeeksNavigator;
pub use stepper::{step, step_backward, step_days, step_forward};
pub use week::{DAYS_PER_WEEK, Direction, WeekEntry, WeekWindow, build_week};
