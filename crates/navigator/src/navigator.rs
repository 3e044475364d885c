//! The public week navigator.

use tracing::{debug, info};
use weeks_calendar::{CalendarYearProvider, Gregorian, Month, Weekday, YearCalendar};

use crate::config::NavigatorConfig;
use crate::cursor::Cursor;
use crate::date::{CalendarDate, DateInput};
use crate::error::NavigatorError;
use crate::index::Indices;
use crate::stepper::step_days;
use crate::week::{DAYS_PER_WEEK, Direction, WeekWindow, build_week};

/// Steps through calendar weeks one at a time from a fixed start date.
///
/// On construction the navigator shows the Monday-anchored week containing
/// the start date. [`increment_week`](Self::increment_week) moves to the next
/// week (Monday-anchored), [`decrement_week`](Self::decrement_week) to the
/// previous one (Sunday-anchored, entries listed Sunday → Monday), and
/// [`reset_week`](Self::reset_week) returns to the start week.
///
/// # Example
///
/// ```
/// use weeks_navigator::WeeksNavigator;
/// use weeks_calendar::{Month, Weekday};
///
/// let mut nav = WeeksNavigator::new("2023-07-10").unwrap();
/// assert_eq!(nav.week().get(Weekday::Sunday).unwrap().day, 16);
///
/// let next = nav.increment_week().unwrap();
/// let monday = next.get(Weekday::Monday).unwrap();
/// assert_eq!((monday.day, monday.month), (17, Month::July));
/// ```
#[derive(Debug, Clone)]
pub struct WeeksNavigator<P = Gregorian> {
    provider: P,
    config: NavigatorConfig,
    start: CalendarDate,
    cursor: Cursor,
    week: WeekWindow,
}

impl WeeksNavigator<Gregorian> {
    /// Creates a navigator from a date string using the Gregorian provider.
    ///
    /// Accepts `"today"`, `yyyy-mm-dd`, or a textual date like
    /// `"Mon Jul 10 2023"`.
    ///
    /// # Errors
    ///
    /// Returns [`NavigatorError::InvalidDateInput`] for unparseable input, or
    /// a desync error if the date does not exist.
    pub fn new(input: &str) -> Result<Self, NavigatorError> {
        Self::with_provider(input.parse()?, Gregorian, NavigatorConfig::default())
    }

    /// Creates a navigator starting from the current local date.
    pub fn today() -> Result<Self, NavigatorError> {
        Self::with_provider(DateInput::Today, Gregorian, NavigatorConfig::default())
    }
}

impl<P: CalendarYearProvider> WeeksNavigator<P> {
    /// Creates a navigator with an explicit provider and configuration.
    ///
    /// # Errors
    ///
    /// Fails if a textual month name is unknown or the date does not exist in
    /// the provider's calendar for its year.
    pub fn with_provider(
        input: DateInput,
        provider: P,
        config: NavigatorConfig,
    ) -> Result<Self, NavigatorError> {
        let seed = input.seed(&provider)?;
        let mut cursor = Cursor::locate(seed, &provider)?;
        let start = *cursor.date();
        let week = build_week(
            &mut cursor,
            &provider,
            Direction::Forward,
            &start,
            config.start_match(),
        )?;
        info!(start = %start, "navigator created");
        Ok(Self {
            provider,
            config,
            start,
            cursor,
            week,
        })
    }

    /// Moves to the following week and returns it (Monday → Sunday).
    ///
    /// # Errors
    ///
    /// Fails past the last representable year or if the provider breaks the
    /// cursor invariant. The navigator is unchanged on error.
    pub fn increment_week(&mut self) -> Result<&WeekWindow, NavigatorError> {
        self.shift_week(Direction::Forward)
    }

    /// Moves to the preceding week and returns it (Sunday → Monday).
    ///
    /// # Errors
    ///
    /// Fails before the first representable year or if the provider breaks
    /// the cursor invariant. The navigator is unchanged on error.
    pub fn decrement_week(&mut self) -> Result<&WeekWindow, NavigatorError> {
        self.shift_week(Direction::Backward)
    }

    /// Moves one week in `direction`: seven days, then a rebuild anchored for
    /// that direction.
    #[tracing::instrument(skip(self))]
    pub fn shift_week(&mut self, direction: Direction) -> Result<&WeekWindow, NavigatorError> {
        let mut cursor = self.cursor.clone();
        step_days(&mut cursor, &self.provider, direction, DAYS_PER_WEEK)?;
        self.commit(cursor, direction)
    }

    /// Returns to the week containing the start date (Monday → Sunday).
    ///
    /// # Errors
    ///
    /// Only fails if the provider breaks the cursor invariant. The navigator
    /// is unchanged on error.
    pub fn reset_week(&mut self) -> Result<&WeekWindow, NavigatorError> {
        debug!(start = %self.start, "resetting to start week");
        let cursor = Cursor::locate(self.start, &self.provider)?;
        self.commit(cursor, Direction::Forward)
    }

    /// Builds the window around `cursor` and only then replaces the current
    /// cursor and week.
    fn commit(
        &mut self,
        mut cursor: Cursor,
        direction: Direction,
    ) -> Result<&WeekWindow, NavigatorError> {
        let week = build_week(
            &mut cursor,
            &self.provider,
            direction,
            &self.start,
            self.config.start_match(),
        )?;
        self.cursor = cursor;
        self.week = week;
        Ok(&self.week)
    }

    /// The current week window.
    pub fn week(&self) -> &WeekWindow {
        &self.week
    }

    /// The date the navigator was created with.
    pub fn start_date(&self) -> &CalendarDate {
        &self.start
    }

    /// The working date, left on the anchor of the current window.
    pub fn working_date(&self) -> &CalendarDate {
        self.cursor.date()
    }

    pub fn indices(&self) -> Indices {
        self.cursor.indices()
    }

    /// The year calendar the working date currently lives in.
    pub fn calendar(&self) -> &YearCalendar {
        self.cursor.calendar()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Last day number of the working month.
    pub fn last_day_of_month(&self) -> u8 {
        self.cursor.last_day_of_month()
    }

    /// Month at the cached month index.
    pub fn month_from_index(&self) -> Month {
        self.cursor.month_from_index()
    }

    /// Day number at the cached indices.
    pub fn day_from_index(&self) -> u8 {
        self.cursor.day_from_index()
    }

    /// Weekday at the cached indices.
    pub fn weekday_from_index(&self) -> Weekday {
        self.cursor.weekday_from_index()
    }
}
