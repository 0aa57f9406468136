//! Week partitioner: calendar weeks covering a reporting window.

use crate::errors::{AppError, AppResult};
use crate::models::week::Week;
use chrono::{Datelike, Duration, NaiveDate};

/// Latest Sunday preceding the given date (the date itself for no weekday;
/// a Sunday input yields the previous Sunday).
fn last_sunday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64 + 1)
}

/// Ordered (Monday, Sunday) weeks for the reporting window.
///
/// The first week ends on the latest Sunday before `start`; subsequent weeks
/// advance by seven days while the Sunday endpoint stays before `end`. The
/// result is contiguous, non-overlapping and ascending, and holds at least
/// one week even when `start == end`.
pub fn weeks_between(start: NaiveDate, end: NaiveDate) -> AppResult<Vec<Week>> {
    if end < start {
        return Err(AppError::InvalidRange(format!(
            "end date {end} precedes start date {start}"
        )));
    }

    let mut sunday = last_sunday(start);
    let mut weeks = vec![Week::ending(sunday)];
    sunday = sunday + Duration::days(7);
    while sunday < end {
        weeks.push(Week::ending(sunday));
        sunday = sunday + Duration::days(7);
    }
    Ok(weeks)
}

/// Buckets (Mondays) of the weeks already completed at the reporting date.
/// Weeks whose Sunday is still in the future never reach a report.
pub fn completed_buckets(weeks: &[Week], reporting_date: NaiveDate) -> Vec<NaiveDate> {
    weeks
        .iter()
        .take_while(|w| w.sunday <= reporting_date)
        .map(|w| w.monday)
        .collect()
}
