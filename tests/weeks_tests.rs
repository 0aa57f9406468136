use chrono::{Duration, NaiveDate};
use togglrep::core::weeks::{completed_buckets, weeks_between};
use togglrep::errors::AppError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn test_weeks_are_contiguous_seven_days_ascending() {
    for (start, end) in [
        (date(2024, 1, 8), date(2024, 3, 4)),
        (date(2024, 2, 1), date(2024, 2, 29)),
        (date(2023, 12, 20), date(2024, 1, 15)),
    ] {
        let weeks = weeks_between(start, end).expect("valid range");
        assert!(!weeks.is_empty());
        for week in &weeks {
            assert_eq!(week.sunday - week.monday, Duration::days(6));
        }
        for pair in weeks.windows(2) {
            assert_eq!(pair[1].monday, pair[0].sunday + Duration::days(1));
        }
    }
}

#[test]
fn test_first_week_sunday_precedes_start() {
    // one start date per weekday
    for day in 5..12 {
        let start = date(2024, 2, day);
        let weeks = weeks_between(start, date(2024, 3, 4)).expect("valid range");
        assert!(weeks[0].sunday <= start, "start {start}");
    }
}

#[test]
fn test_monday_start_reports_previous_week() {
    let weeks = weeks_between(date(2024, 1, 8), date(2024, 3, 4)).expect("valid range");
    assert_eq!(weeks[0].monday, date(2024, 1, 1));
    assert_eq!(weeks[0].sunday, date(2024, 1, 7));
}

#[test]
fn test_single_day_range_yields_one_week() {
    let day = date(2024, 2, 14);
    let weeks = weeks_between(day, day).expect("valid range");
    assert_eq!(weeks.len(), 1);
    assert!(weeks[0].sunday <= day);
}

#[test]
fn test_reversed_range_fails() {
    let err = weeks_between(date(2024, 3, 4), date(2024, 1, 8)).unwrap_err();
    assert!(matches!(err, AppError::InvalidRange(_)));
}

#[test]
fn test_completed_buckets_exclude_future_weeks() {
    let weeks = weeks_between(date(2024, 2, 5), date(2024, 3, 3)).expect("valid range");
    assert_eq!(weeks.len(), 4);

    // mid-window: only the two weeks whose Sunday has passed
    let buckets = completed_buckets(&weeks, date(2024, 2, 14));
    assert_eq!(buckets, vec![date(2024, 1, 29), date(2024, 2, 5)]);

    // at the end of the window every week is complete
    let all = completed_buckets(&weeks, date(2024, 3, 3));
    assert_eq!(all.len(), 4);
}
