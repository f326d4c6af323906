//! mmpbquiz library root.
//! Exposes the CLI parser, the high-level run() function and the quiz modules
//! (dataset loading, session controller, report, export).

pub mod cli;
pub mod config;
pub mod core;
pub mod dataset;
pub mod errors;
pub mod export;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;
use utils::path::expand_tilde;

/// Configuration file selected by `--config`, or the default location.
pub fn config_path(cli: &Cli) -> PathBuf {
    cli.config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file)
}

/// Load the configuration once and apply command-line overrides.
pub fn load_config(cli: &Cli) -> AppResult<Config> {
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load_from(&config_path(cli))?
    };

    if let Some(dataset) = &cli.dataset {
        cfg.dataset = dataset.clone();
    }
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    Ok(cfg)
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Play { .. } => cli::commands::play::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // init must work even when the existing file no longer parses
    if matches!(cli.command, Commands::Init { .. }) {
        return cli::commands::init::handle(&cli);
    }

    let cfg = load_config(&cli)?;
    dispatch(&cli, &cfg)
}
