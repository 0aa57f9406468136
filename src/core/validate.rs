//! Single-pass timesheet policy checks.
//!
//! Records are inspected in arrival order, one scope at a time; the only
//! state carried across records is the per-user reference entry used by the
//! overlap check. Validation reports, never drops: every record is still
//! folded into the aggregates afterwards, so the report reflects total
//! logged time even when entries are suspicious.

use crate::models::record::{NO_PROJECT, TimeRecord};
use crate::models::violation::{Violation, ViolationRule};
use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Group records per user and order them by start time, as the overlap check
/// requires. Must run before validation whenever the arrival order across
/// users is not guaranteed by the collaborator.
pub fn sort_for_validation(records: &mut [TimeRecord]) {
    records.sort_by(|a, b| a.user.cmp(&b.user).then(a.start.cmp(&b.start)));
}

/// Streaming policy checker with explicit per-user state.
#[derive(Debug)]
pub struct Validator {
    threshold_hours: f64,
    /// Compensated end of the overlap reference entry, per user. Tracked
    /// across the whole validation scope, never reset per week.
    last_ends: HashMap<String, NaiveDateTime>,
}

impl Validator {
    pub fn new(threshold_hours: f64) -> Self {
        Self {
            threshold_hours,
            last_ends: HashMap::new(),
        }
    }

    /// Check one record, rewriting a missing project to the sentinel in
    /// place. Returns every violation the record fires (possibly none,
    /// possibly several).
    pub fn check(&mut self, record: &mut TimeRecord) -> Vec<Violation> {
        let mut violations = Vec::new();

        // Missing project first: later checks and the aggregates see the
        // sentinel value.
        if record.project.is_empty() {
            record.project = NO_PROJECT.to_string();
            violations.push(violation(ViolationRule::MissingProject, record));
        }

        // Overlap against the compensated end of the reference entry for
        // this user. On overlap the reference advances only if the current
        // record ends later, so a contained record never becomes the new
        // reference point.
        let end = record.overlap_end();
        match self.last_ends.entry(record.user.clone()) {
            Entry::Occupied(mut last) if *last.get() > record.start => {
                violations.push(violation(ViolationRule::Overlap, record));
                if end > *last.get() {
                    last.insert(end);
                }
            }
            Entry::Occupied(mut last) => {
                last.insert(end);
            }
            Entry::Vacant(slot) => {
                slot.insert(end);
            }
        }

        // Excessive single-entry duration. Does not touch overlap tracking.
        if record.duration_hours > self.threshold_hours {
            violations.push(violation(ViolationRule::TooLong, record));
        }

        violations
    }
}

fn violation(rule: ViolationRule, record: &TimeRecord) -> Violation {
    Violation {
        rule,
        user: record.user.clone(),
        team: record.team.clone(),
        project: record.project.clone(),
        date: record.date(),
        duration_hours: record.duration_hours,
    }
}
