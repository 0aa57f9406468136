use crate::api::TogglClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::detailed::DetailedLogic;
use crate::core::overachievers::OverachieversLogic;
use crate::errors::AppResult;
use crate::export::{notify_export_success, out_writer, write_violations};
use crate::utils::date::resolve_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Overachievers {
        output,
        date,
        threshold,
        force,
    } = cmd
    {
        let reporting_date = resolve_date(date.as_deref())?;
        cfg.ensure_in_window(reporting_date)?;

        let client = TogglClient::from_config(cfg)?;
        let fetched = DetailedLogic::fetch(&client, cfg, reporting_date, false)?;

        let threshold = threshold.unwrap_or(cfg.threshold_hours);
        let violations = OverachieversLogic::find(&fetched.records, threshold);

        write_violations(out_writer(output, *force)?, &violations)?;
        notify_export_success("Overachievers report", output);
    }
    Ok(())
}
