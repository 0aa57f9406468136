//! Pivot aggregates into the flat rows the output views need.

use crate::core::aggregate::WeeklyHours;

/// One flattened output line: dimension values, derived statistic columns,
/// then one nullable value per week. `None` is "no data for this key in this
/// week", distinct from `Some(0.0)` meaning zero hours logged.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub dims: Vec<String>,
    pub stats: Vec<Option<f64>>,
    pub cells: Vec<Option<f64>>,
}

/// Flatten `table` against the given ascending week buckets.
///
/// One row per key with at least one non-null cell; keys whose data all
/// falls outside `weeks` are skipped. `dims` extracts the printable
/// dimension columns from the key. Pure function of the aggregate: shaping
/// twice yields identical rows.
pub fn shape<K, W, F>(table: &WeeklyHours<K, W>, weeks: &[W], dims: F) -> Vec<ReportRow>
where
    K: Ord,
    W: Ord + Clone,
    F: Fn(&K) -> Vec<String>,
{
    let mut rows = Vec::new();
    for key in table.keys() {
        let cells: Vec<Option<f64>> = weeks.iter().map(|week| table.get(key, week)).collect();
        if cells.iter().all(Option::is_none) {
            continue;
        }
        rows.push(ReportRow {
            dims: dims(key),
            stats: Vec::new(),
            cells,
        });
    }
    rows
}

/// Re-buckets raw project names into a fixed allow-list plus one catch-all
/// bucket absorbing everything else (electives).
#[derive(Debug, Clone)]
pub struct ProjectClassifier {
    core_projects: Vec<String>,
    electives_label: String,
}

impl ProjectClassifier {
    pub fn new(core_projects: Vec<String>, electives_label: impl Into<String>) -> Self {
        Self {
            core_projects,
            electives_label: electives_label.into(),
        }
    }

    pub fn classify<'a>(&'a self, project: &'a str) -> &'a str {
        if self.core_projects.iter().any(|p| p == project) {
            project
        } else {
            &self.electives_label
        }
    }

    /// Allow-list order followed by the catch-all: the row order of the
    /// summary view.
    pub fn ordered_buckets(&self) -> Vec<String> {
        let mut buckets = self.core_projects.clone();
        buckets.push(self.electives_label.clone());
        buckets
    }
}
