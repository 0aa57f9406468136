use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::team::TeamLogic;
use crate::errors::AppResult;
use crate::export::{in_reader, notify_export_success, out_writer, read_individual, write_report};

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Team {
        input,
        output,
        force,
    } = cmd
    {
        let (week_labels, rows) = read_individual(in_reader(input)?)?;
        let report = TeamLogic::build(week_labels, rows);

        write_report(
            out_writer(output, *force)?,
            &["team", "project"],
            &["average", "std"],
            &report.week_labels,
            &report.rows,
        )?;
        notify_export_success("Team report", output);
    }
    Ok(())
}
