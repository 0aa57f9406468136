use chrono::NaiveDate;

/// Timesheet policy rules enforced by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationRule {
    /// Entry logged without a project.
    MissingProject,
    /// Entry starts before the previous entry of the same user ends.
    Overlap,
    /// Single entry longer than the configured threshold.
    TooLong,
}

impl ViolationRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationRule::MissingProject => "missing_project",
            ViolationRule::Overlap => "overlap",
            ViolationRule::TooLong => "too_long",
        }
    }
}

/// A reported policy breach. Emitted, never retracted; a single record can
/// fire several rules. Violations are data, not errors: the offending record
/// still counts toward every aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub rule: ViolationRule,
    pub user: String,
    pub team: String,
    pub project: String,
    pub date: NaiveDate,
    pub duration_hours: f64,
}
