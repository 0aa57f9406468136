//! Fetch raw time records for every workspace across the completed weeks.

use crate::api::{ReportingApi, Workspace};
use crate::config::Config;
use crate::core::weeks::weeks_between;
use crate::errors::AppResult;
use crate::models::record::TimeRecord;
use crate::ui::messages;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

pub struct FetchedRecords {
    pub workspaces: Vec<Workspace>,
    pub records: Vec<TimeRecord>,
}

pub struct DetailedLogic;

impl DetailedLogic {
    /// Records for every workspace and every week already completed at the
    /// reporting date, week by week in the order the API returns them.
    /// Records from inactive users are skipped unless `include_inactive` is
    /// set; users excluded in the configuration never appear.
    pub fn fetch(
        api: &dyn ReportingApi,
        cfg: &Config,
        reporting_date: NaiveDate,
        include_inactive: bool,
    ) -> AppResult<FetchedRecords> {
        let (start, end) = cfg.reporting_window()?;
        let weeks = weeks_between(start, end)?;

        let workspaces = api.list_workspaces()?;

        let mut active_users: HashMap<u64, HashSet<String>> = HashMap::new();
        if !include_inactive {
            for ws in &workspaces {
                active_users.insert(ws.id, api.list_active_users(ws.id)?);
            }
        }

        let mut records = Vec::new();
        for week in &weeks {
            if week.sunday > reporting_date {
                break;
            }
            for ws in &workspaces {
                messages::debug(format!(
                    "fetching {} [{}..{}]",
                    ws.name, week.monday, week.sunday
                ));
                for record in api.fetch_time_records(ws, week.monday, week.sunday)? {
                    if let Some(active) = active_users.get(&ws.id) {
                        if !active.contains(&record.user) {
                            continue;
                        }
                    }
                    if cfg.excluded_users.contains(&record.user) {
                        continue;
                    }
                    records.push(record);
                }
            }
        }

        messages::debug(format!("{} records fetched", records.len()));
        Ok(FetchedRecords {
            workspaces,
            records,
        })
    }
}
