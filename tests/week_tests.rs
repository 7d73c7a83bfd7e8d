use chrono::{Datelike, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use taskplanner::week::{current_week, month_label, start_of_week, week_of, WeekStart};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_friday_week_starting_sunday() {
    let week = current_week(at(2023, 4, 7, 9, 15), WeekStart::Sunday);

    assert_eq!(week.len(), 7);
    assert_eq!(week[0].date, date(2023, 4, 2));
    assert_eq!(week[6].date, date(2023, 4, 8));
    assert_eq!(week[0].weekday_name, "Sunday");
    assert_eq!(week[5].weekday_name, "Friday");

    let today: Vec<_> = week.iter().filter(|d| d.is_today).collect();
    assert_eq!(today.len(), 1);
    assert_eq!(today[0].date, date(2023, 4, 7));
}

#[test]
fn test_friday_week_starting_monday() {
    let week = current_week(at(2023, 4, 7, 23, 59), WeekStart::Monday);

    assert_eq!(week[0].date, date(2023, 4, 3));
    assert_eq!(week[6].date, date(2023, 4, 9));
    assert!(week[4].is_today);
    assert_eq!(week[4].weekday_name, "Friday");
}

#[test]
fn test_week_starting_saturday_ends_on_friday() {
    let week = current_week(at(2023, 4, 7, 0, 0), WeekStart::Saturday);

    assert_eq!(week[0].date, date(2023, 4, 1));
    assert!(week[6].is_today);
}

#[test]
fn test_today_on_week_start_is_first_entry() {
    let week = current_week(at(2023, 4, 2, 12, 0), WeekStart::Sunday);
    assert_eq!(week[0].date, date(2023, 4, 2));
    assert!(week[0].is_today);
}

#[test]
fn test_week_crosses_month_and_year() {
    // Thursday 2026-12-31
    let week = current_week(at(2026, 12, 31, 8, 0), WeekStart::Monday);
    assert_eq!(week[0].date, date(2026, 12, 28));
    assert_eq!(week[6].date, date(2027, 1, 3));
}

#[test]
fn test_week_day_labels() {
    let week = current_week(at(2023, 4, 7, 9, 15), WeekStart::Sunday);
    assert_eq!(week[5].short_name(), "Fri");
    assert_eq!(week[5].day_of_month(), "07");
    assert_eq!(week[3].short_name(), "Wed");
}

#[test]
fn test_month_label() {
    assert_eq!(month_label(date(2023, 4, 7)), "Apr 2023");
}

#[test]
fn test_week_at_end_of_date_range() {
    for week_start in [WeekStart::Sunday, WeekStart::Monday, WeekStart::Saturday] {
        let start = start_of_week(NaiveDate::MAX, week_start).unwrap();
        let week = week_of(NaiveDate::MAX, NaiveDate::MAX, week_start);
        // Complete exactly when the last representable date closes the week.
        let fits = (NaiveDate::MAX - start).num_days() == 6;
        assert_eq!(week.len() == 7, fits, "week start {:?}", week_start);
        assert_eq!(week.is_empty(), !fits, "week start {:?}", week_start);
        if let Some(last) = week.last() {
            assert_eq!(last.date, NaiveDate::MAX);
        }
    }
}

#[test]
fn test_week_of_flags_real_today_only() {
    let week = week_of(date(2023, 4, 7), date(2023, 4, 4), WeekStart::Sunday);
    let flagged: Vec<_> = week.iter().filter(|d| d.is_today).map(|d| d.date).collect();
    assert_eq!(flagged, vec![date(2023, 4, 4)]);
}

#[test]
fn test_week_of_outside_today_flags_nothing() {
    let week = week_of(date(2023, 4, 7), date(2026, 10, 17), WeekStart::Sunday);
    assert_eq!(week.len(), 7);
    assert!(week.iter().all(|d| !d.is_today));
}

fn any_datetime() -> impl Strategy<Value = NaiveDateTime> {
    (0u64..150_000, 0u32..24, 0u32..60).prop_map(|(days, h, m)| {
        (date(1900, 1, 1) + chrono::Days::new(days)).and_hms_opt(h, m, 0).unwrap()
    })
}

fn any_week_start() -> impl Strategy<Value = WeekStart> {
    prop_oneof![Just(WeekStart::Sunday), Just(WeekStart::Monday), Just(WeekStart::Saturday)]
}

proptest! {
    #[test]
    fn prop_week_is_seven_consecutive_days(now in any_datetime(), start in any_week_start()) {
        let week = current_week(now, start);
        prop_assert_eq!(week.len(), 7);
        for pair in week.windows(2) {
            prop_assert_eq!((pair[1].date - pair[0].date).num_days(), 1);
        }
    }

    #[test]
    fn prop_exactly_one_day_is_today(now in any_datetime(), start in any_week_start()) {
        let week = current_week(now, start);
        let flagged: Vec<_> = week.iter().filter(|d| d.is_today).collect();
        prop_assert_eq!(flagged.len(), 1);
        prop_assert_eq!(flagged[0].date, now.date());
    }

    #[test]
    fn prop_week_begins_on_week_start(now in any_datetime(), start in any_week_start()) {
        let week = current_week(now, start);
        prop_assert_eq!(week[0].date.weekday(), start.weekday());
        prop_assert!(week[0].date <= now.date() && now.date() <= week[6].date);
    }
}
