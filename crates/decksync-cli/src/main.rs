//! decksync CLI - manage Notion page to deck sync settings
//!
//! Every edit goes through the same save-time checks as the settings dialog.

mod cli;
mod commands;
mod config_path;
mod error;
mod manager;

#[cfg(test)]
mod tests;

use clap::Parser;
use decksync_core::ConfigStore;

use crate::cli::{Cli, Commands};
use crate::commands::auth_cmd::run_auth;
use crate::commands::auto_sync::run_auto_sync;
use crate::commands::check::run_check;
use crate::commands::completions::run_completions;
use crate::commands::notion::run_notion;
use crate::commands::pages::run_pages;
use crate::commands::sync::run_sync;
use crate::config_path::resolve_config_path;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(error.exit_code());
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    if let Commands::Completions { shell, output } = &cli.command {
        return run_completions(*shell, output.as_deref());
    }

    let store = ConfigStore::new(resolve_config_path(cli.config)?);
    let debug = store.load().is_ok_and(|config| config.debug);
    init_tracing(debug);

    match cli.command {
        Commands::Pages { command } => run_pages(command, &store)?,
        Commands::AutoSync { command } => run_auto_sync(command, &store)?,
        Commands::Notion { command } => run_notion(command, &store)?,
        Commands::Check => run_check(&store)?,
        Commands::Sync => run_sync(&store)?,
        Commands::Auth { command } => run_auth(command, &store)?,
        Commands::Completions { .. } => {}
    }

    Ok(())
}

fn init_tracing(debug: bool) {
    let default_directive = if debug {
        "decksync=debug"
    } else {
        "decksync=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
