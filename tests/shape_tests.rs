use chrono::NaiveDate;
use togglrep::core::aggregate::WeeklyHours;
use togglrep::core::shape::{ProjectClassifier, shape};

fn monday(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn sample_table() -> (WeeklyHours<(String, String)>, Vec<NaiveDate>) {
    let mut table: WeeklyHours<(String, String)> = WeeklyHours::new();
    let w1 = monday(2024, 1, 1);
    let w2 = monday(2024, 1, 8);
    table.add(("TeamA".into(), "Core".into()), w1, 4.0);
    table.add(("TeamA".into(), "Core".into()), w2, 0.0);
    table.add(("TeamB".into(), "Extra".into()), w2, 5.0);
    (table, vec![w1, w2])
}

#[test]
fn test_null_and_zero_cells_stay_distinct() {
    let (table, weeks) = sample_table();
    let rows = shape(&table, &weeks, |(team, project)| {
        vec![team.clone(), project.clone()]
    });

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].dims, vec!["TeamA", "Core"]);
    assert_eq!(rows[0].cells, vec![Some(4.0), Some(0.0)]);
    // no data in week one for TeamB: null, not zero
    assert_eq!(rows[1].cells, vec![None, Some(5.0)]);
}

#[test]
fn test_shape_is_idempotent() {
    let (table, weeks) = sample_table();
    let dims = |(team, project): &(String, String)| vec![team.clone(), project.clone()];
    assert_eq!(shape(&table, &weeks, dims), shape(&table, &weeks, dims));
}

#[test]
fn test_keys_without_data_in_window_are_skipped() {
    let (mut table, weeks) = sample_table();
    // data only in a later week that the report does not cover yet
    table.add(("TeamC".into(), "Core".into()), monday(2024, 1, 15), 8.0);

    let rows = shape(&table, &weeks, |(team, _)| vec![team.clone()]);
    assert!(rows.iter().all(|r| r.dims[0] != "TeamC"));
}

#[test]
fn test_classifier_routes_unknown_projects_to_catch_all() {
    let classifier = ProjectClassifier::new(
        vec!["Core".to_string(), "Design".to_string()],
        "Electives",
    );

    assert_eq!(classifier.classify("Core"), "Core");
    assert_eq!(classifier.classify("Design"), "Design");
    assert_eq!(classifier.classify("Chess club"), "Electives");
    assert_eq!(classifier.classify(""), "Electives");
    assert_eq!(
        classifier.ordered_buckets(),
        vec!["Core", "Design", "Electives"]
    );
}
