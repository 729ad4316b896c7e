//! presence-analyzer library root.
//! Exposes the CLI parser, the high-level run() function, and the modules
//! behind the HTTP service.

pub mod chart;
pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod errors;
pub mod export;
pub mod http;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use data::DataStore;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let store = || DataStore::from_config(cfg);

    match &cli.command {
        Commands::Init => cli::commands::init::handle(),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Users => cli::commands::users::handle(&store()),
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command, &store()),
        Commands::Chart { .. } => cli::commands::chart::handle(&cli.command, &store()),
        Commands::Interval { .. } => cli::commands::interval::handle(&cli.command),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, &store()),
        Commands::Serve { .. } => cli::commands::serve::handle(&cli.command, cfg, store()),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // command-line data paths win over the config file
    if let Some(csv) = &cli.csv {
        cfg.data_csv = csv.clone();
    }
    if let Some(xml) = &cli.xml {
        cfg.data_xml = xml.clone();
    }

    dispatch(&cli, &cfg)
}
