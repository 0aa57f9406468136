//! CSV serialization of reports, violations and raw records.

use crate::core::shape::ReportRow;
use crate::core::team::IndividualRow;
use crate::errors::{AppError, AppResult};
use crate::models::record::TimeRecord;
use crate::models::violation::Violation;
use crate::utils::round2;
use csv::{Reader, Writer};
use std::io::{Read, Write};

pub const DETAILED_HEADERS: [&str; 5] = ["user", "team", "project", "start", "duration_hours"];
pub const VIOLATION_HEADERS: [&str; 6] =
    ["user", "team", "project", "duration_hours", "date", "rule"];

/// A nullable cell: rounded at this point and nowhere earlier, empty when
/// there is no data.
fn fmt_cell(cell: Option<f64>) -> String {
    match cell {
        Some(v) => round2(v).to_string(),
        None => String::new(),
    }
}

/// Dimension and statistic columns followed by one column per week.
pub fn write_report<W: Write>(
    out: W,
    dim_headers: &[&str],
    stat_headers: &[&str],
    week_labels: &[String],
    rows: &[ReportRow],
) -> AppResult<()> {
    let mut wtr = Writer::from_writer(out);

    let mut header: Vec<String> = dim_headers.iter().map(|h| h.to_string()).collect();
    header.extend(stat_headers.iter().map(|h| h.to_string()));
    header.extend(week_labels.iter().cloned());
    wtr.write_record(&header)?;

    for row in rows {
        let mut fields = row.dims.clone();
        fields.extend(row.stats.iter().map(|s| fmt_cell(*s)));
        fields.extend(row.cells.iter().map(|c| fmt_cell(*c)));
        wtr.write_record(&fields)?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_violations<W: Write>(out: W, violations: &[Violation]) -> AppResult<()> {
    let mut wtr = Writer::from_writer(out);
    wtr.write_record(VIOLATION_HEADERS)?;
    for v in violations {
        wtr.write_record([
            v.user.clone(),
            v.team.clone(),
            v.project.clone(),
            round2(v.duration_hours).to_string(),
            v.date.format("%Y-%m-%d").to_string(),
            v.rule.as_str().to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_detailed<W: Write>(out: W, records: &[TimeRecord]) -> AppResult<()> {
    let mut wtr = Writer::from_writer(out);
    wtr.write_record(DETAILED_HEADERS)?;
    for r in records {
        wtr.write_record([
            r.user.clone(),
            r.team.clone(),
            r.project.clone(),
            r.start_str(),
            round2(r.duration_hours).to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Parse a detailed CSV back into records. Any malformed row aborts the
/// whole run; no partial report is ever produced from bad input.
pub fn read_detailed<R: Read>(input: R) -> AppResult<Vec<TimeRecord>> {
    let mut rdr = Reader::from_reader(input);
    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        records.push(TimeRecord::parse(
            row.get(0).unwrap_or(""),
            row.get(1).unwrap_or(""),
            row.get(2).unwrap_or(""),
            row.get(3).unwrap_or(""),
            row.get(4).unwrap_or(""),
        )?);
    }
    Ok(records)
}

/// Parse an individual report CSV: week labels come from the header, after
/// the four fixed columns.
pub fn read_individual<R: Read>(input: R) -> AppResult<(Vec<String>, Vec<IndividualRow>)> {
    let mut rdr = Reader::from_reader(input);
    let headers = rdr.headers()?.clone();
    if headers.len() < 4 {
        return Err(AppError::MalformedRecord(
            "individual report header is missing columns".to_string(),
        ));
    }
    let week_labels: Vec<String> = headers.iter().skip(4).map(str::to_string).collect();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let row = result?;
        let cells = (4..headers.len())
            .map(|i| parse_cell(row.get(i)))
            .collect::<AppResult<Vec<_>>>()?;
        rows.push(IndividualRow {
            user: row.get(0).unwrap_or("").to_string(),
            team: row.get(1).unwrap_or("").to_string(),
            project: row.get(2).unwrap_or("").to_string(),
            average: parse_cell(row.get(3))?,
            cells,
        });
    }
    Ok((week_labels, rows))
}

fn parse_cell(field: Option<&str>) -> AppResult<Option<f64>> {
    match field.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<f64>()
            .map(Some)
            .map_err(|_| AppError::MalformedRecord(format!("bad numeric cell: {s:?}"))),
    }
}
