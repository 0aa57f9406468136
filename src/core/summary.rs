//! Organization-wide matrix: project × team × week, normalized by team size.

use crate::core::aggregate::WeeklyHours;
use crate::core::shape::ProjectClassifier;
use crate::models::record::TimeRecord;
use crate::models::week::Week;
use std::collections::{BTreeMap, BTreeSet};

pub struct SummaryReport {
    pub week_labels: Vec<String>,
    /// Workspace names, in the order the API lists them.
    pub teams: Vec<String>,
    /// Projects with at least one populated cell: allow-list order first,
    /// the catch-all bucket last.
    pub projects: Vec<String>,
    /// (project, team) -> one nullable normalized value per week. Absent
    /// combinations never had data.
    pub cells: BTreeMap<(String, String), Vec<Option<f64>>>,
}

pub struct SummaryLogic;

impl SummaryLogic {
    /// Fold records into per-(project bucket, team, week) hours and divide
    /// each team's cells by its distinct contributing user count. `weeks`
    /// must already be cut down to the completed reporting weeks.
    pub fn build(
        records: &[TimeRecord],
        teams: &[String],
        classifier: &ProjectClassifier,
        weeks: &[Week],
        label_format: &str,
    ) -> SummaryReport {
        let mut members: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for record in records {
            members
                .entry(record.team.as_str())
                .or_default()
                .insert(record.user.as_str());
        }

        let mut table: WeeklyHours<(String, String)> = WeeklyHours::new();
        for record in records {
            let bucket = classifier.classify(&record.project).to_string();
            table.add(
                (bucket, record.team.clone()),
                record.week_bucket(),
                record.duration_hours,
            );
        }

        let buckets: Vec<_> = weeks.iter().map(|w| w.monday).collect();
        let mut cells = BTreeMap::new();
        let mut projects = Vec::new();
        for project in classifier.ordered_buckets() {
            let mut any = false;
            for team in teams {
                let key = (project.clone(), team.clone());
                let row: Vec<Option<f64>> =
                    buckets.iter().map(|bucket| table.get(&key, bucket)).collect();
                if row.iter().all(Option::is_none) {
                    continue;
                }
                let team_size = members
                    .get(team.as_str())
                    .map_or(1, |users| users.len().max(1)) as f64;
                cells.insert(key, row.iter().map(|c| c.map(|v| v / team_size)).collect());
                any = true;
            }
            if any {
                projects.push(project);
            }
        }

        SummaryReport {
            week_labels: weeks.iter().map(|w| w.label(label_format)).collect(),
            teams: teams.to_vec(),
            projects,
            cells,
        }
    }
}
