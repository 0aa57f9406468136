use crate::api::TogglClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::detailed::DetailedLogic;
use crate::core::shape::ProjectClassifier;
use crate::core::summary::SummaryLogic;
use crate::core::weeks::weeks_between;
use crate::errors::AppResult;
use crate::export::html::write_summary;
use crate::export::{notify_export_success, out_writer};
use crate::utils::date::resolve_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        output,
        date,
        force,
    } = cmd
    {
        let reporting_date = resolve_date(date.as_deref())?;
        cfg.ensure_in_window(reporting_date)?;

        let client = TogglClient::from_config(cfg)?;
        let fetched = DetailedLogic::fetch(&client, cfg, reporting_date, false)?;

        let (start, end) = cfg.reporting_window()?;
        let completed: Vec<_> = weeks_between(start, end)?
            .into_iter()
            .filter(|w| w.sunday <= reporting_date)
            .collect();

        let teams: Vec<String> = fetched.workspaces.iter().map(|w| w.name.clone()).collect();
        let classifier =
            ProjectClassifier::new(cfg.core_projects.clone(), cfg.electives_label.clone());
        let report = SummaryLogic::build(
            &fetched.records,
            &teams,
            &classifier,
            &completed,
            &cfg.report_date_format,
        );

        let generated_at = chrono::Local::now().format("%b %d %Y %I:%M%p").to_string();
        write_summary(out_writer(output, *force)?, &report, &generated_at)?;
        notify_export_success("Summary report", output);
    }
    Ok(())
}
