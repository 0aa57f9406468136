use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Reporting date: the explicit override, or the system date.
pub fn resolve_date(over: Option<&str>) -> AppResult<NaiveDate> {
    match over {
        None => Ok(today()),
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
    }
}
