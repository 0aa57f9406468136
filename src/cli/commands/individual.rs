use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::individual::IndividualLogic;
use crate::errors::AppResult;
use crate::export::{
    err_writer, in_reader, notify_export_success, out_writer, read_detailed, write_report,
    write_violations,
};
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Individual {
        input,
        output,
        violations,
        threshold,
        force,
    } = cmd
    {
        let records = read_detailed(in_reader(input)?)?;
        let threshold = threshold.unwrap_or(cfg.threshold_hours);

        let report = IndividualLogic::build(records, threshold);
        messages::debug(format!(
            "{} rows, {} violations",
            report.rows.len(),
            report.violations.len()
        ));

        let labels: Vec<String> = report
            .week_buckets
            .iter()
            .map(|monday| monday.format(&cfg.report_date_format).to_string())
            .collect();

        write_report(
            out_writer(output, *force)?,
            &["user", "team", "project"],
            &["average"],
            &labels,
            &report.rows,
        )?;
        write_violations(err_writer(violations, *force)?, &report.violations)?;
        notify_export_success("Individual report", output);
    }
    Ok(())
}
