//! Reporting API collaborator seam.

pub mod toggl;

pub use toggl::TogglClient;

use crate::errors::AppResult;
use crate::models::record::TimeRecord;
use chrono::NaiveDate;
use std::collections::HashSet;

/// A workspace (team) in the reporting service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub id: u64,
    pub name: String,
}

/// Remote reporting service contract.
///
/// The core treats every call as a synchronous, blocking operation returning
/// flattened data; pagination and rate-limit retries live behind this seam.
/// Within one workspace and window, records arrive ordered by start date
/// ascending.
pub trait ReportingApi {
    fn list_workspaces(&self) -> AppResult<Vec<Workspace>>;

    /// Identities of the users currently active in the workspace.
    fn list_active_users(&self, workspace_id: u64) -> AppResult<HashSet<String>>;

    /// All records for the workspace in `[since, until]`, fully paginated.
    fn fetch_time_records(
        &self,
        workspace: &Workspace,
        since: NaiveDate,
        until: NaiveDate,
    ) -> AppResult<Vec<TimeRecord>>;
}
