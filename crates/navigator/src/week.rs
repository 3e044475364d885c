//! Seven-day week windows and the builder that fills them.

use std::fmt;
use std::str::FromStr;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use tracing::debug;
use weeks_calendar::{CalendarYearProvider, Month, Weekday};

use crate::config::StartMatch;
use crate::cursor::Cursor;
use crate::date::CalendarDate;
use crate::error::NavigatorError;
use crate::stepper::step;

/// Number of days in a week window.
pub const DAYS_PER_WEEK: usize = 7;

/// Which way a week window is built.
///
/// `Forward` windows are anchored on Monday and list Monday → Sunday.
/// `Backward` windows are anchored on Sunday and list Sunday → Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Weekday the window starts on.
    pub const fn anchor(self) -> Weekday {
        match self {
            Direction::Forward => Weekday::Monday,
            Direction::Backward => Weekday::Sunday,
        }
    }

    /// The opposite direction.
    pub const fn reverse(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        })
    }
}

impl FromStr for Direction {
    type Err = NavigatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "forward" | "increment" => Ok(Direction::Forward),
            "backward" | "decrement" => Ok(Direction::Backward),
            _ => Err(NavigatorError::InvalidDirection {
                value: s.to_string(),
            }),
        }
    }
}

/// One day of a week window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeekEntry {
    pub day: u8,
    pub month: Month,
    pub year: i32,
    /// Whether this day is the navigator's start date.
    pub start_date: bool,
}

/// Seven consecutive days keyed by weekday.
///
/// Entries keep the order they were built in: Monday → Sunday for a
/// [`Direction::Forward`] window, Sunday → Monday for a
/// [`Direction::Backward`] one. Serialises as a map in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekWindow {
    direction: Direction,
    entries: Vec<(Weekday, WeekEntry)>,
}

impl WeekWindow {
    fn new(direction: Direction) -> Self {
        Self {
            direction,
            entries: Vec::with_capacity(DAYS_PER_WEEK),
        }
    }

    fn record(&mut self, date: &CalendarDate, start: &CalendarDate, start_match: StartMatch) {
        let entry = WeekEntry {
            day: date.day,
            month: date.month,
            year: date.year,
            start_date: start_match.matches(date, start),
        };
        self.entries.push((date.weekday, entry));
    }

    /// Direction the window was built in.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for `weekday`.
    pub fn get(&self, weekday: Weekday) -> Option<&WeekEntry> {
        self.entries
            .iter()
            .find(|(w, _)| *w == weekday)
            .map(|(_, e)| e)
    }

    /// Entries in build order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &WeekEntry)> + '_ {
        self.entries.iter().map(|(w, e)| (*w, e))
    }

    /// Entries Monday → Sunday regardless of build direction.
    pub fn iter_monday_first(&self) -> impl Iterator<Item = (Weekday, &WeekEntry)> + '_ {
        Weekday::MONDAY_FIRST
            .into_iter()
            .filter_map(|w| self.get(w).map(|e| (w, e)))
    }

    /// The first entry: Monday for forward windows, Sunday for backward ones.
    pub fn anchor(&self) -> Option<(Weekday, &WeekEntry)> {
        self.entries.first().map(|(w, e)| (*w, e))
    }

    /// The entry flagged as the start date, if the window contains it.
    pub fn start_entry(&self) -> Option<(Weekday, &WeekEntry)> {
        self.iter().find(|(_, e)| e.start_date)
    }
}

impl Serialize for WeekWindow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (weekday, entry) in &self.entries {
            map.serialize_entry(weekday.name(), entry)?;
        }
        map.end()
    }
}

/// Builds the week window around the cursor.
///
/// A forward build first steps back to the week's Monday; a backward build
/// first steps ahead to the week's Sunday. The anchor day and the six days
/// after it (in `direction`) are recorded. The cursor is left on the anchor.
///
/// # Errors
///
/// Propagates stepping errors, which only occur if the provider breaks the
/// cursor invariant.
#[tracing::instrument(skip_all, fields(direction = %direction))]
pub fn build_week<P>(
    cursor: &mut Cursor,
    provider: &P,
    direction: Direction,
    start: &CalendarDate,
    start_match: StartMatch,
) -> Result<WeekWindow, NavigatorError>
where
    P: CalendarYearProvider + ?Sized,
{
    let anchor = direction.anchor();
    while cursor.date().weekday != anchor {
        step(cursor, provider, direction.reverse())?;
    }

    let mut window = WeekWindow::new(direction);
    window.record(cursor.date(), start, start_match);
    let mut walker = cursor.clone();
    for _ in 1..DAYS_PER_WEEK {
        step(&mut walker, provider, direction)?;
        window.record(walker.date(), start, start_match);
    }

    debug!(anchor = %cursor.date(), "week built");
    Ok(window)
}
