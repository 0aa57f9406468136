//! togglrep library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Detailed { .. } => cli::commands::detailed::handle(&cli.command, cfg),
        Commands::Individual { .. } => cli::commands::individual::handle(&cli.command, cfg),
        Commands::Team { .. } => cli::commands::team::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Overachievers { .. } => cli::commands::overachievers::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let level = if cli.quiet { 0 } else { 1 + cli.verbose };
    ui::messages::set_verbosity(level);

    // `init` bootstraps the config file itself and takes no `&Config`; it must
    // not require the config to already exist (loading an explicit, missing
    // `--config` path is a hard error), so dispatch it before loading.
    if let Commands::Init { .. } = cli.command {
        return cli::commands::init::handle(&cli);
    }

    let cfg = Config::load(cli.config.as_deref())?;

    dispatch(&cli, &cfg)
}
