//! Per-(team, project) roll-up of an individual report.

use crate::core::aggregate::{WeeklyHours, mean, std_dev};
use crate::core::shape::{ReportRow, shape};
use std::collections::{BTreeMap, BTreeSet};

/// One parsed line of an individual report CSV.
#[derive(Debug, Clone)]
pub struct IndividualRow {
    pub user: String,
    pub team: String,
    pub project: String,
    pub average: Option<f64>,
    pub cells: Vec<Option<f64>>,
}

pub struct TeamReport {
    pub week_labels: Vec<String>,
    /// Dimensions `[team, project]`, statistics `[average, std]`; weekly
    /// cells normalized by team size.
    pub rows: Vec<ReportRow>,
}

pub struct TeamLogic;

impl TeamLogic {
    /// Collapse individual rows across users. Weekly cells are divided by
    /// the number of distinct users who contributed at least one record to
    /// the team (not a configured roster size); `std` is the population
    /// deviation of the per-user averages within the (team, project), a
    /// measure of how balanced the team effort is.
    pub fn build(week_labels: Vec<String>, rows: Vec<IndividualRow>) -> TeamReport {
        let mut table: WeeklyHours<(String, String), usize> = WeeklyHours::new();
        let mut user_averages: BTreeMap<(String, String), Vec<f64>> = BTreeMap::new();
        let mut members: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for row in &rows {
            let key = (row.team.clone(), row.project.clone());
            for (week, cell) in row.cells.iter().enumerate() {
                if let Some(hours) = cell {
                    table.add(key.clone(), week, *hours);
                }
            }
            if let Some(avg) = row.average {
                user_averages.entry(key).or_default().push(avg);
            }
            members
                .entry(row.team.clone())
                .or_default()
                .insert(row.user.clone());
        }

        let week_indexes: Vec<usize> = (0..week_labels.len()).collect();
        let mut out = shape(&table, &week_indexes, |(team, project)| {
            vec![team.clone(), project.clone()]
        });

        for row in &mut out {
            let team_size = members
                .get(row.dims[0].as_str())
                .map_or(1, |users| users.len().max(1)) as f64;
            for cell in row.cells.iter_mut().flatten() {
                *cell /= team_size;
            }

            let values: Vec<f64> = row.cells.iter().flatten().copied().collect();
            let key = (row.dims[0].clone(), row.dims[1].clone());
            let averages = user_averages.get(&key).map(Vec::as_slice).unwrap_or(&[]);
            row.stats = vec![Some(mean(&values)), Some(std_dev(averages))];
        }

        TeamReport {
            week_labels,
            rows: out,
        }
    }
}
