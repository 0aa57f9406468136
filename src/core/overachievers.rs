//! Entries exceeding the single-record duration threshold.

use crate::models::record::TimeRecord;
use crate::models::violation::{Violation, ViolationRule};

pub struct OverachieversLogic;

impl OverachieversLogic {
    /// Every record longer than the threshold, as `too_long` violations in
    /// arrival order. Projects are listed as logged, without normalization.
    pub fn find(records: &[TimeRecord], threshold_hours: f64) -> Vec<Violation> {
        records
            .iter()
            .filter(|r| r.duration_hours > threshold_hours)
            .map(|r| Violation {
                rule: ViolationRule::TooLong,
                user: r.user.clone(),
                team: r.team.clone(),
                project: r.project.clone(),
                date: r.date(),
                duration_hours: r.duration_hours,
            })
            .collect()
    }
}
