//! Text rendering of week windows and month grids.

use std::fmt::Write;

use weeks_calendar::{MonthEntry, Weekday};
use weeks_navigator::WeekWindow;

/// How command output is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Renders a week window one day per line, in build order.
///
/// The start date, if present, is marked with `*`.
pub fn week_text(title: &str, window: &WeekWindow) -> String {
    let mut out = format!("{title} ({})\n", window.direction());
    for (weekday, entry) in window.iter() {
        let marker = if entry.start_date { " *" } else { "" };
        let _ = writeln!(
            out,
            "  {:<9} {:>2} {} {}{marker}",
            weekday.name(),
            entry.day,
            entry.month,
            entry.year
        );
    }
    out
}

/// Renders a month as a Monday-first grid.
pub fn month_grid(year: i32, month: &MonthEntry) -> String {
    let mut out = format!("{} {year}\n", month.name());
    let header: Vec<&str> = Weekday::MONDAY_FIRST
        .iter()
        .map(|w| &w.short_name()[..2])
        .collect();
    out.push_str(&header.join(" "));
    out.push('\n');

    let offset = month
        .days()
        .first()
        .map_or(0, |d| usize::from((d.weekday.num_days_from_sunday() + 6) % 7));
    let mut cells: Vec<String> = vec!["  ".to_string(); offset];
    cells.extend(month.days().iter().map(|d| format!("{:>2}", d.day)));
    for row in cells.chunks(7) {
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use weeks_calendar::{CalendarYearProvider, Gregorian, Month};
    use weeks_navigator::WeeksNavigator;

    #[test]
    fn week_text_marks_start() {
        let nav = WeeksNavigator::new("2023-07-12").unwrap();
        let text = week_text("Start week", nav.week());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Start week (forward)");
        assert_eq!(lines.len(), 8);
        assert!(lines[1].starts_with("  Monday    10 July 2023"));
        assert!(lines[3].ends_with("12 July 2023 *"));
    }

    #[test]
    fn month_grid_offsets_first_day() {
        let cal = Gregorian.full_calendar_year(2024);
        let grid = month_grid(2024, cal.entry(Month::February).unwrap());
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines[0], "February 2024");
        assert_eq!(lines[1], "Mo Tu We Th Fr Sa Su");
        // Feb 1 2024 is a Thursday.
        assert_eq!(lines[2], "          1  2  3  4");
        assert_eq!(lines.last().unwrap(), &"26 27 28 29");
    }
}
