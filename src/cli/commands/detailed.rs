use crate::api::TogglClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::detailed::DetailedLogic;
use crate::errors::{AppError, AppResult};
use crate::export::{notify_export_success, out_writer, write_detailed};
use crate::ui::messages;
use crate::utils::date::resolve_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Detailed {
        output,
        date,
        all,
        force,
    } = cmd
    {
        let reporting_date = resolve_date(date.as_deref())?;
        let (start, _) = cfg.reporting_window()?;
        if reporting_date < start {
            return Err(AppError::InvalidRange(format!(
                "start date {start} has not yet come"
            )));
        }

        let client = TogglClient::from_config(cfg)?;
        let fetched = DetailedLogic::fetch(&client, cfg, reporting_date, *all)?;
        messages::debug(format!(
            "{} workspaces, {} records",
            fetched.workspaces.len(),
            fetched.records.len()
        ));

        write_detailed(out_writer(output, *force)?, &fetched.records)?;
        notify_export_success("Detailed report", output);
    }
    Ok(())
}
