//! attendlog library root.
//! Exposes the record store, the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::env;
use utils::path::resolve_path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Login { .. } => cli::commands::login::handle(&cli.command, cfg),
        Commands::Logout { .. } => cli::commands::logout::handle(&cli.command, cfg),
        Commands::Remark { .. } => cli::commands::remark::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Activities => cli::commands::activities::handle(),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Configuration file (or defaults) with the command-line overrides applied.
pub fn effective_config(cli: &Cli) -> AppResult<Config> {
    let mut cfg = Config::load()?;

    if let Some(table) = &cli.table {
        cfg.table = resolve_path(table, &env::current_dir()?)
            .to_string_lossy()
            .to_string();
    }
    if let Some(schema) = cli.schema {
        cfg.schema = schema;
    }
    if let Some(allow) = cli.allow_duplicates {
        cfg.allow_duplicate_open_sessions = Some(allow);
    }

    Ok(cfg)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cfg = effective_config(&cli)?;
    dispatch(&cli, &cfg)
}
