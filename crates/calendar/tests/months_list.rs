use weeks_calendar::{CalendarError, CalendarYearProvider, Gregorian, Month, Weekday};

#[test]
fn provider_lists_twelve_months() {
    let months = Gregorian.months_list();
    assert_eq!(months.len(), 12);
    assert_eq!(months[0].name, "January");
    assert_eq!(months[1].short_name, "Feb");
    assert_eq!(months[11].month, Month::December);
}

#[test]
fn provider_through_reference() {
    fn year_of<P: CalendarYearProvider>(p: P) -> i32 {
        p.full_calendar_year(2001).year()
    }
    assert_eq!(year_of(&Gregorian), 2001);
}

#[test]
fn trait_object_provider() {
    let provider: &dyn CalendarYearProvider = &Gregorian;
    assert_eq!(provider.full_calendar_year(2020).day_count(), 366);
    assert_eq!(provider.months_list()[6].name, "July");
}

#[test]
fn weekday_name_errors() {
    assert!(matches!(
        Weekday::from_name("Someday"),
        Err(CalendarError::UnknownWeekdayName { .. })
    ));
}
