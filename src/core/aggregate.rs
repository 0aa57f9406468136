//! Nested rolling-sum accumulator keyed by dimension tuples.

use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

/// Accumulated hours per (dimension key, week bucket).
///
/// Cells default to zero on first add and exist only for weeks that received
/// at least one record; an absent week means "no data", which reporting keeps
/// distinct from an explicit zero. Sums stay at full precision; rounding
/// happens only when a report cell is materialized.
///
/// Folding is additive, commutative and not idempotent: feeding the same
/// record twice double-counts it. Guarding against reprocessing is the
/// caller's job.
#[derive(Debug)]
pub struct WeeklyHours<K: Ord, W: Ord = NaiveDate> {
    cells: BTreeMap<K, BTreeMap<W, f64>>,
}

impl<K: Ord, W: Ord + Clone> WeeklyHours<K, W> {
    pub fn new() -> Self {
        Self {
            cells: BTreeMap::new(),
        }
    }

    /// Add hours to the cell at (key, week), creating it at zero first.
    pub fn add(&mut self, key: K, week: W, hours: f64) {
        *self
            .cells
            .entry(key)
            .or_default()
            .entry(week)
            .or_insert(0.0) += hours;
    }

    /// `None` when the key never received hours in that week.
    pub fn get(&self, key: &K, week: &W) -> Option<f64> {
        self.cells.get(key).and_then(|weeks| weeks.get(week)).copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.cells.keys()
    }

    /// Distinct week buckets present across all keys, ascending.
    pub fn week_buckets(&self) -> Vec<W> {
        let buckets: BTreeSet<W> = self
            .cells
            .values()
            .flat_map(|weeks| weeks.keys().cloned())
            .collect();
        buckets.into_iter().collect()
    }

    /// Average over the weeks that hold a value for the key: explicit zeros
    /// count, absent weeks do not. Computed only after folding completes.
    pub fn average(&self, key: &K) -> Option<f64> {
        let weeks = self.cells.get(key)?;
        if weeks.is_empty() {
            return None;
        }
        Some(weeks.values().sum::<f64>() / weeks.len() as f64)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Ord, W: Ord + Clone> Default for WeeklyHours<K, W> {
    fn default() -> Self {
        Self::new()
    }
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (zero for an empty slice).
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let avg = mean(values);
    let variance = values.iter().map(|v| (avg - v).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
