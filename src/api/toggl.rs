//! Toggl reports API client: basic auth, pagination, rate-limit retries.

use crate::api::{ReportingApi, Workspace};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::record::{TimeRecord, parse_timestamp};
use crate::ui::messages;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::NaiveDate;
use serde::Deserialize;
use std::cell::Cell;
use std::collections::HashSet;
use std::thread;
use std::time::Duration;

const BASE_URL: &str = "https://toggl.com";
const USER_AGENT: &str = "togglrep";
const DATE_FORMAT: &str = "%Y-%m-%d";
const RETRIES: u32 = 3;

pub struct TogglClient {
    agent: ureq::Agent,
    auth_header: String,
    /// Adaptive pause before a retry, in seconds. Grows by one on every
    /// rate-limit hit and shrinks back after a successful call.
    pause_secs: Cell<u64>,
}

impl TogglClient {
    pub fn new(api_token: &str) -> Self {
        let auth = BASE64.encode(format!("{api_token}:api_token"));
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout(Duration::from_secs(30))
                .build(),
            auth_header: format!("Basic {auth}"),
            pause_secs: Cell::new(0),
        }
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        if cfg.api_token.is_empty() {
            return Err(AppError::Config(
                "api_token is not set; edit the configuration file".to_string(),
            ));
        }
        Ok(Self::new(&cfg.api_token))
    }

    fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> AppResult<T> {
        let url = format!("{BASE_URL}{path}");
        for attempt in 1..=RETRIES {
            let mut request = self
                .agent
                .get(&url)
                .set("Authorization", &self.auth_header)
                .set("User-Agent", USER_AGENT);
            for (name, value) in query {
                request = request.query(name, value);
            }

            match request.call() {
                Ok(response) => {
                    self.pause_secs.set(self.pause_secs.get().saturating_sub(1));
                    return response
                        .into_json::<T>()
                        .map_err(|e| AppError::Api(format!("bad response from {path}: {e}")));
                }
                Err(ureq::Error::Status(429, _)) => {
                    let pause = self.pause_secs.get() + 1;
                    self.pause_secs.set(pause);
                    messages::debug(format!(
                        "rate limited on {path}, pausing {pause}s (attempt {attempt}/{RETRIES})"
                    ));
                    thread::sleep(Duration::from_secs(pause));
                }
                Err(ureq::Error::Status(code, response)) => {
                    return Err(AppError::Api(format!(
                        "{path} returned HTTP {code}: {}",
                        response.into_string().unwrap_or_default()
                    )));
                }
                Err(e) => {
                    return Err(AppError::Api(format!("request to {path} failed: {e}")));
                }
            }
        }
        Err(AppError::Api(format!(
            "{path}: rate limit (HTTP 429), retries exhausted"
        )))
    }
}

impl ReportingApi for TogglClient {
    /// Workspaces the token administers, personal ones filtered out.
    fn list_workspaces(&self) -> AppResult<Vec<Workspace>> {
        let data: Vec<WorkspaceDto> = self.get_json("/api/v8/workspaces", &[])?;
        Ok(data
            .into_iter()
            .filter(|w| w.admin && !w.name.contains("personal"))
            .map(|w| Workspace {
                id: w.id,
                name: w.name,
            })
            .collect())
    }

    fn list_active_users(&self, workspace_id: u64) -> AppResult<HashSet<String>> {
        let users: Vec<WorkspaceUserDto> =
            self.get_json(&format!("/api/v8/workspaces/{workspace_id}/workspace_users"), &[])?;
        Ok(users
            .into_iter()
            .filter(|u| !u.inactive)
            .map(|u| u.name)
            .collect())
    }

    fn fetch_time_records(
        &self,
        workspace: &Workspace,
        since: NaiveDate,
        until: NaiveDate,
    ) -> AppResult<Vec<TimeRecord>> {
        let mut records = Vec::new();
        let mut page: u64 = 1;
        loop {
            let report: DetailedPage = self
                .get_json(
                    "/reports/api/v2/details",
                    &[
                        ("workspace_id", workspace.id.to_string()),
                        ("since", since.format(DATE_FORMAT).to_string()),
                        ("until", until.format(DATE_FORMAT).to_string()),
                        ("user_agent", USER_AGENT.to_string()),
                        ("order_field", "date".to_string()),
                        ("order_desc", "off".to_string()),
                        ("display_hours", "decimal".to_string()),
                        ("page", page.to_string()),
                    ],
                )
                .map_err(|e| AppError::CollaboratorUnavailable {
                    workspace: workspace.name.clone(),
                    since: since.to_string(),
                    until: until.to_string(),
                    reason: e.to_string(),
                })?;

            for dto in report.data {
                records.push(dto.into_record(&workspace.name)?);
            }

            if page * report.per_page >= report.total_count {
                return Ok(records);
            }
            page += 1;
        }
    }
}

#[derive(Debug, Deserialize)]
struct WorkspaceDto {
    id: u64,
    name: String,
    #[serde(default)]
    admin: bool,
}

#[derive(Debug, Deserialize)]
struct WorkspaceUserDto {
    name: String,
    #[serde(default)]
    inactive: bool,
}

#[derive(Debug, Deserialize)]
struct DetailedPage {
    data: Vec<RecordDto>,
    per_page: u64,
    total_count: u64,
}

#[derive(Debug, Deserialize)]
struct RecordDto {
    user: String,
    project: Option<String>,
    /// ISO-8601 with offset, e.g. `2015-05-29T16:07:20+03:00`.
    start: String,
    /// Duration in milliseconds.
    dur: i64,
}

impl RecordDto {
    fn into_record(self, team: &str) -> AppResult<TimeRecord> {
        if self.dur < 0 {
            return Err(AppError::MalformedRecord(format!(
                "negative duration for user {} at {}",
                self.user, self.start
            )));
        }
        Ok(TimeRecord {
            start: parse_timestamp(&self.start)?,
            user: self.user,
            team: team.to_string(),
            project: self.project.unwrap_or_default(),
            duration_hours: self.dur as f64 / 3_600_000.0,
        })
    }
}
