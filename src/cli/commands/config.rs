use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            print!("{}", serde_yaml::to_string(cfg)?);
        } else {
            messages::info("nothing to do: pass --print to show the configuration");
        }
    }
    Ok(())
}
