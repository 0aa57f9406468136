//! Per-(user, team, project) weekly report with policy validation.

use crate::core::aggregate::WeeklyHours;
use crate::core::shape::{ReportRow, shape};
use crate::core::validate::{Validator, sort_for_validation};
use crate::models::record::TimeRecord;
use crate::models::violation::Violation;
use chrono::NaiveDate;

pub struct IndividualReport {
    /// Mondays of the weeks present in the data, ascending.
    pub week_buckets: Vec<NaiveDate>,
    /// Dimensions `[user, team, project]`, one `average` statistic.
    pub rows: Vec<ReportRow>,
    pub violations: Vec<Violation>,
}

pub struct IndividualLogic;

impl IndividualLogic {
    /// Validate every record and fold it into (user, team, project) weekly
    /// sums in a single pass. Suspicious records still count: validation
    /// reports, never drops.
    pub fn build(mut records: Vec<TimeRecord>, threshold_hours: f64) -> IndividualReport {
        sort_for_validation(&mut records);

        let mut validator = Validator::new(threshold_hours);
        let mut violations = Vec::new();
        let mut table: WeeklyHours<(String, String, String)> = WeeklyHours::new();

        for mut record in records {
            violations.extend(validator.check(&mut record));
            table.add(
                (
                    record.user.clone(),
                    record.team.clone(),
                    record.project.clone(),
                ),
                record.week_bucket(),
                record.duration_hours,
            );
        }

        let week_buckets = table.week_buckets();
        let mut rows = shape(&table, &week_buckets, |(user, team, project)| {
            vec![user.clone(), team.clone(), project.clone()]
        });
        for row in &mut rows {
            // Average over the weeks that hold data for this key; explicit
            // zeros count, absent weeks do not.
            let values: Vec<f64> = row.cells.iter().flatten().copied().collect();
            row.stats = vec![Some(values.iter().sum::<f64>() / values.len() as f64)];
        }

        IndividualReport {
            week_buckets,
            rows,
            violations,
        }
    }
}
