//! Self-contained HTML summary page with the matrix embedded as JSON.

use crate::core::summary::SummaryReport;
use crate::errors::AppResult;
use crate::utils::round2;
use serde_json::{Map, Value, json};
use std::io::Write;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Weekly time report</title>
<style>
  body { font-family: sans-serif; margin: 2em; color: #222; }
  h1 { font-size: 1.4em; }
  h2 { font-size: 1.1em; margin-top: 1.6em; }
  table { border-collapse: collapse; margin-top: 0.5em; }
  th, td { border: 1px solid #bbb; padding: 0.25em 0.6em; text-align: right; }
  th { background: #f0f0f0; }
  td.team { text-align: left; }
  td.empty { background: #fafafa; color: #999; }
  p.stamp { margin-top: 2em; font-size: 0.8em; color: #777; }
</style>
</head>
<body>
<h1>Weekly time report</h1>
<div id="report"></div>
"#;

const PAGE_TAIL: &str = r#"<script>
  var root = document.getElementById('report');
  projects.forEach(function (project) {
    var teamRows = report_data[project];
    if (!teamRows) { return; }
    var h = document.createElement('h2');
    h.textContent = project;
    root.appendChild(h);

    var table = document.createElement('table');
    var head = table.insertRow();
    head.appendChild(document.createElement('th')).textContent = 'team';
    week_labels.forEach(function (label) {
      head.appendChild(document.createElement('th')).textContent = label;
    });

    teams.forEach(function (team) {
      var values = teamRows[team];
      if (!values) { return; }
      var row = table.insertRow();
      var name = row.insertCell();
      name.className = 'team';
      name.textContent = team;
      values.forEach(function (value) {
        var cell = row.insertCell();
        if (value === null) {
          cell.className = 'empty';
          cell.textContent = '—';
        } else {
          cell.textContent = value.toFixed(2);
        }
      });
    });
    root.appendChild(table);
  });
  document.getElementById('stamp').textContent = 'Generated ' + timestamp;
</script>
<p class="stamp" id="stamp"></p>
</body>
</html>
"#;

/// Render the summary matrix as one self-contained page. The data is
/// embedded as JSON so downstream tooling can scrape it unchanged.
pub fn write_summary<W: Write>(
    mut out: W,
    report: &SummaryReport,
    generated_at: &str,
) -> AppResult<()> {
    let mut report_data = Map::new();
    for project in &report.projects {
        let mut teams = Map::new();
        for team in &report.teams {
            if let Some(cells) = report.cells.get(&(project.clone(), team.clone())) {
                let values: Vec<Value> = cells
                    .iter()
                    .map(|cell| match cell {
                        Some(v) => json!(round2(*v)),
                        None => Value::Null,
                    })
                    .collect();
                teams.insert(team.clone(), Value::Array(values));
            }
        }
        report_data.insert(project.clone(), Value::Object(teams));
    }

    out.write_all(PAGE_HEAD.as_bytes())?;
    writeln!(
        out,
        "<script>\nvar week_labels = {};\nvar report_data = {};\nvar teams = {};\nvar projects = {};\nvar timestamp = {};\n</script>",
        serde_json::to_string(&report.week_labels)?,
        serde_json::to_string(&Value::Object(report_data))?,
        serde_json::to_string(&report.teams)?,
        serde_json::to_string(&report.projects)?,
        serde_json::to_string(generated_at)?,
    )?;
    out.write_all(PAGE_TAIL.as_bytes())?;
    out.flush()?;
    Ok(())
}
