use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let path = Config::init_all(cli.config.as_deref(), *force)?;
        messages::success(format!("Config file: {}", path.display()));
        messages::info("Set api_token, start_date and end_date before running reports");
    }
    Ok(())
}
