use decksync_core::ConfigStore;

use crate::cli::AutoSyncCommands;
use crate::commands::common::{open_session, save_session};
use crate::error::CliError;

pub fn run_auto_sync(command: AutoSyncCommands, store: &ConfigStore) -> Result<(), CliError> {
    let mut session = open_session(store)?;
    match command {
        AutoSyncCommands::Status => {
            let switch = session.auto_sync;
            if switch.is_enabled() {
                println!("Auto sync: on, every {} minute(s)", switch.field().minutes());
            } else {
                println!("Auto sync: off");
            }
            return Ok(());
        }
        AutoSyncCommands::Enable { minutes } => {
            if let Some(minutes) = minutes {
                session.set_interval_text(&minutes)?;
            }
            session.auto_sync.set_enabled(true);
        }
        AutoSyncCommands::Disable => session.auto_sync.set_enabled(false),
    }

    println!("{}", session.auto_sync.save_label());
    let config = save_session(&session, store)?;
    if !config.sync_every_minutes.is_enabled() {
        println!("Auto sync is off");
    }
    Ok(())
}
