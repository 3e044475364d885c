use weeks_calendar::{Month, Weekday};
use weeks_navigator::{Direction, WeekWindow, WeeksNavigator};

fn ymd(window: &WeekWindow, weekday: Weekday) -> (i32, Month, u8) {
    let e = window.get(weekday).unwrap();
    (e.year, e.month, e.day)
}

fn assert_well_formed(window: &WeekWindow) {
    assert_eq!(window.len(), 7);
    let mut keys: Vec<Weekday> = window.iter().map(|(w, _)| w).collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), 7, "weekday keys must be distinct");
    let flagged = window.iter().filter(|(_, e)| e.start_date).count();
    assert!(flagged <= 1, "at most one start entry, got {flagged}");
}

#[test]
fn monday_start_week() {
    let nav = WeeksNavigator::new("2023-07-10").unwrap();
    let week = nav.week();
    assert_well_formed(week);
    let monday = week.get(Weekday::Monday).unwrap();
    assert_eq!((monday.day, monday.month, monday.year), (10, Month::July, 2023));
    assert!(monday.start_date);
    assert_eq!(week.get(Weekday::Sunday).unwrap().day, 16);
    assert_eq!(week.direction(), Direction::Forward);
}

#[test]
fn increment_moves_to_next_monday() {
    let mut nav = WeeksNavigator::new("2023-07-10").unwrap();
    let week = nav.increment_week().unwrap().clone();
    assert_well_formed(&week);
    assert_eq!(week.anchor().unwrap().0, Weekday::Monday);
    assert_eq!(week.anchor().unwrap().1.day, 17);
    assert_eq!(ymd(&week, Weekday::Sunday), (2023, Month::July, 23));
    assert!(week.start_entry().is_none());
    assert_eq!(nav.working_date().day, 17);
}

#[test]
fn decrement_is_sunday_anchored() {
    let mut nav = WeeksNavigator::new("2023-07-10").unwrap();
    let week = nav.decrement_week().unwrap().clone();
    assert_well_formed(&week);
    assert_eq!(week.direction(), Direction::Backward);
    let order: Vec<Weekday> = week.iter().map(|(w, _)| w).collect();
    assert_eq!(
        order,
        [
            Weekday::Sunday,
            Weekday::Saturday,
            Weekday::Friday,
            Weekday::Thursday,
            Weekday::Wednesday,
            Weekday::Tuesday,
            Weekday::Monday,
        ]
    );
    assert_eq!(ymd(&week, Weekday::Sunday), (2023, Month::July, 9));
    assert_eq!(ymd(&week, Weekday::Monday), (2023, Month::July, 3));
    assert_eq!(nav.working_date().weekday, Weekday::Sunday);
}

#[test]
fn reset_restores_construction_window() {
    let mut nav = WeeksNavigator::new("2024-02-28").unwrap();
    let initial = nav.week().clone();
    let initial_working = *nav.working_date();

    for _ in 0..5 {
        nav.increment_week().unwrap();
    }
    nav.decrement_week().unwrap();
    for _ in 0..60 {
        nav.decrement_week().unwrap();
    }
    assert_ne!(nav.calendar().year(), 2024);

    let reset = nav.reset_week().unwrap().clone();
    assert_eq!(reset, initial);
    assert_eq!(*nav.working_date(), initial_working);
    assert_eq!(nav.calendar().year(), 2024);
}

#[test]
fn increment_then_decrement_covers_same_days() {
    for start in ["2023-07-10", "2023-07-13", "2023-12-31", "2024-02-29", "2024-01-01"] {
        let mut nav = WeeksNavigator::new(start).unwrap();
        let initial: Vec<_> = nav
            .week()
            .iter_monday_first()
            .map(|(w, e)| (w, *e))
            .collect();

        nav.increment_week().unwrap();
        nav.decrement_week().unwrap();
        let back: Vec<_> = nav
            .week()
            .iter_monday_first()
            .map(|(w, e)| (w, *e))
            .collect();
        assert_eq!(back, initial, "inc/dec from {start}");

        nav.decrement_week().unwrap();
        nav.increment_week().unwrap();
        let forth: Vec<_> = nav
            .week()
            .iter_monday_first()
            .map(|(w, e)| (w, *e))
            .collect();
        assert_eq!(forth, initial, "dec/inc from {start}");
    }
}

#[test]
fn consecutive_weeks_are_contiguous() {
    let mut nav = WeeksNavigator::new("2023-11-15").unwrap();
    let mut prev_sunday = ymd(nav.week(), Weekday::Sunday);
    for _ in 0..20 {
        let week = nav.increment_week().unwrap().clone();
        assert_well_formed(&week);
        let monday = ymd(&week, Weekday::Monday);
        let mut probe = WeeksNavigator::new(&format!(
            "{:04}-{:02}-{:02}",
            prev_sunday.0,
            prev_sunday.1.number(),
            prev_sunday.2
        ))
        .unwrap();
        let following = probe.increment_week().unwrap();
        assert_eq!(ymd(following, Weekday::Monday), monday);
        prev_sunday = ymd(&week, Weekday::Sunday);
    }
}

#[test]
fn every_window_is_well_formed_across_a_year() {
    let mut nav = WeeksNavigator::new("2023-01-01").unwrap();
    for _ in 0..60 {
        assert_well_formed(nav.increment_week().unwrap());
    }
    for _ in 0..120 {
        assert_well_formed(nav.decrement_week().unwrap());
    }
}
