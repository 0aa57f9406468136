use chrono::NaiveDate;
use togglrep::core::validate::{Validator, sort_for_validation};
use togglrep::models::record::{NO_PROJECT, TimeRecord, parse_timestamp};
use togglrep::models::violation::ViolationRule;

fn record(user: &str, project: &str, start: &str, duration_hours: f64) -> TimeRecord {
    TimeRecord {
        user: user.to_string(),
        team: "TeamA".to_string(),
        project: project.to_string(),
        start: parse_timestamp(start).expect("valid timestamp"),
        duration_hours,
    }
}

#[test]
fn test_clean_records_emit_no_violations() {
    let mut validator = Validator::new(10.0);
    let mut records = vec![
        record("alice", "Core", "2024-01-01T09:00:00", 2.0),
        record("alice", "Core", "2024-01-01T13:00:00", 3.0),
        record("bob", "Extra", "2024-01-01T09:30:00", 1.5),
    ];
    for r in &mut records {
        assert!(validator.check(r).is_empty());
    }
}

#[test]
fn test_missing_project_normalized_to_sentinel() {
    let mut validator = Validator::new(10.0);
    let mut r = record("alice", "", "2024-01-01T09:00:00", 2.0);
    let violations = validator.check(&mut r);

    assert_eq!(r.project, NO_PROJECT);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].rule, ViolationRule::MissingProject);
    // the violation carries the normalized project value
    assert_eq!(violations[0].project, NO_PROJECT);
    assert_eq!(
        violations[0].date,
        NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
    );
}

#[test]
fn test_overlap_fires_for_second_record() {
    let mut validator = Validator::new(10.0);
    let mut a = record("alice", "Core", "2024-01-01T09:00:00", 2.0);
    let mut b = record("alice", "Core", "2024-01-01T10:00:00", 1.0);

    assert!(validator.check(&mut a).is_empty());
    let violations = validator.check(&mut b);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].rule, ViolationRule::Overlap);
    assert_eq!(violations[0].duration_hours, 1.0);
}

#[test]
fn test_contained_record_does_not_become_reference() {
    let mut validator = Validator::new(10.0);
    // a runs 09:00-11:59 (compensated); b is fully contained and ends
    // 10:29; c starts after b ends but before a does
    let mut a = record("alice", "Core", "2024-01-01T09:00:00", 3.0);
    let mut b = record("alice", "Core", "2024-01-01T10:00:00", 0.5);
    let mut c = record("alice", "Core", "2024-01-01T10:45:00", 0.1);

    assert!(validator.check(&mut a).is_empty());
    assert_eq!(validator.check(&mut b).len(), 1);
    // fires only because the reference is still a
    let violations = validator.check(&mut c);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].rule, ViolationRule::Overlap);
}

#[test]
fn test_one_minute_compensation_absorbs_rounding() {
    let mut validator = Validator::new(10.0);
    let mut a = record("alice", "Core", "2024-01-01T09:00:00", 1.0);
    // compensated end of a is 09:59: starting right there is not an overlap
    let mut b = record("alice", "Core", "2024-01-01T09:59:00", 1.0);
    assert!(validator.check(&mut a).is_empty());
    assert!(validator.check(&mut b).is_empty());

    let mut validator = Validator::new(10.0);
    let mut a = record("alice", "Core", "2024-01-01T09:00:00", 1.0);
    let mut b = record("alice", "Core", "2024-01-01T09:58:00", 1.0);
    assert!(validator.check(&mut a).is_empty());
    assert_eq!(validator.check(&mut b).len(), 1);
}

#[test]
fn test_users_tracked_independently() {
    let mut validator = Validator::new(10.0);
    let mut a = record("alice", "Core", "2024-01-01T09:00:00", 2.0);
    let mut b = record("bob", "Core", "2024-01-01T10:00:00", 1.0);
    assert!(validator.check(&mut a).is_empty());
    assert!(validator.check(&mut b).is_empty());
}

#[test]
fn test_too_long_record_flagged() {
    let mut validator = Validator::new(10.0);
    let mut r = record("alice", "Core", "2024-01-01T08:00:00", 12.0);
    let violations = validator.check(&mut r);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].rule, ViolationRule::TooLong);

    // at the threshold is fine
    let mut r = record("bob", "Core", "2024-01-01T08:00:00", 10.0);
    assert!(validator.check(&mut r).is_empty());
}

#[test]
fn test_one_record_can_fire_several_rules() {
    let mut validator = Validator::new(10.0);
    let mut r = record("alice", "", "2024-01-01T08:00:00", 12.0);
    let rules: Vec<ViolationRule> = validator
        .check(&mut r)
        .iter()
        .map(|v| v.rule)
        .collect();
    assert_eq!(
        rules,
        vec![ViolationRule::MissingProject, ViolationRule::TooLong]
    );
}

#[test]
fn test_sort_groups_by_user_then_start() {
    let mut records = vec![
        record("bob", "Core", "2024-01-01T09:00:00", 1.0),
        record("alice", "Core", "2024-01-02T09:00:00", 1.0),
        record("alice", "Core", "2024-01-01T09:00:00", 1.0),
    ];
    sort_for_validation(&mut records);
    assert_eq!(records[0].user, "alice");
    assert_eq!(records[0].start, parse_timestamp("2024-01-01T09:00:00").unwrap());
    assert_eq!(records[1].user, "alice");
    assert_eq!(records[2].user, "bob");
}
