use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

/// Sentinel project name assigned to entries logged without a project.
pub const NO_PROJECT: &str = "(no project)";

/// Timestamp layout used in detailed CSVs and by the reporting API
/// (timezone offset stripped).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One logged work interval.
///
/// `project` is empty when the entry carried no project; the validator
/// rewrites it to [`NO_PROJECT`] while checking. Records are immutable
/// otherwise and are discarded once folded into aggregates.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeRecord {
    pub user: String,
    pub team: String,
    pub project: String,
    pub start: NaiveDateTime,
    pub duration_hours: f64,
}

impl TimeRecord {
    /// Build a record from raw string fields, as read from a detailed CSV.
    /// Bad timestamps or durations are fatal: the report must never be
    /// silently incomplete.
    pub fn parse(
        user: &str,
        team: &str,
        project: &str,
        start: &str,
        duration: &str,
    ) -> AppResult<Self> {
        let start = parse_timestamp(start)?;
        let duration_hours: f64 = duration.trim().parse().map_err(|_| {
            AppError::MalformedRecord(format!("bad duration {duration:?} for user {user}"))
        })?;
        if duration_hours < 0.0 {
            return Err(AppError::MalformedRecord(format!(
                "negative duration {duration_hours} for user {user} at {start}"
            )));
        }
        Ok(Self {
            user: user.to_string(),
            team: team.to_string(),
            project: project.to_string(),
            start,
            duration_hours,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn start_str(&self) -> String {
        self.start.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Monday of the ISO week containing `start`; every downstream aggregate
    /// is bucketed by this date.
    pub fn week_bucket(&self) -> NaiveDate {
        let d = self.start.date();
        d - Duration::days(d.weekday().num_days_from_monday() as i64)
    }

    /// Entry end with the duration reduced by one minute, absorbing the
    /// rounding noise of the upstream milliseconds-to-hours conversion.
    /// Used only by the overlap check, never for aggregated hours.
    pub fn overlap_end(&self) -> NaiveDateTime {
        self.start + Duration::milliseconds((self.duration_hours * 3_600_000.0) as i64)
            - Duration::minutes(1)
    }
}

/// Parse an ISO-8601 timestamp, ignoring any trailing timezone offset
/// (`2015-05-29T16:07:20+03:00` parses as local wall-clock time).
pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    let trimmed = s.get(..19).unwrap_or(s);
    NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT)
        .map_err(|_| AppError::MalformedRecord(format!("bad timestamp: {s:?}")))
}
