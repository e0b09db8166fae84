//! tsheet library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

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
pub fn dispatch(cli: &Cli, cfg: &mut Config) -> AppResult<()> {
    use cli::commands as c;

    match &cli.command {
        Commands::Init => c::init::handle(cfg),
        Commands::Config { .. } => c::config::handle(&cli.command, cfg),
        Commands::New { .. } => c::new::handle(&cli.command, cfg),
        Commands::Sheets => c::sheets::handle(cfg),
        Commands::Open { .. } => c::open::handle(&cli.command, cfg),
        Commands::Remove { .. } => c::remove::handle(&cli.command, cfg),
        Commands::Settings { .. } => c::settings::handle(cli, cfg),
        Commands::Add { .. } => c::add::handle(cli, cfg),
        Commands::Entries { .. } => c::entries::handle(cli, cfg),
        Commands::Edit { .. } => c::edit::handle(cli, cfg),
        Commands::Del { .. } => c::del::handle(cli, cfg),
        Commands::Summary { .. } => c::summary::handle(cli, cfg),
        Commands::Activities => c::activities::handle(cli, cfg),
        Commands::Export { .. } => c::export::handle(cli, cfg),
        Commands::Backup { .. } => c::backup::handle(&cli.command, cfg),
        Commands::Log { .. } => c::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let home = cli.home.clone().unwrap_or_else(Config::default_home);
    let mut cfg = Config::load(&home)?;
    log::debug!("home directory: {}", cfg.home.display());

    dispatch(&cli, &mut cfg)
}
