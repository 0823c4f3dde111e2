use decksync_core::{AddonConfig, ConfigStore};

use crate::commands::common::{open_session, print_save_summary};
use crate::error::CliError;
use crate::manager::FileAddonManager;

pub fn run_sync(store: &ConfigStore) -> Result<(), CliError> {
    let mut manager = FileAddonManager::new(store.clone());
    run_sync_with(&mut manager)?;
    Ok(())
}

/// Save the stored settings through `manager` and request one sync.
pub fn run_sync_with(manager: &mut FileAddonManager) -> Result<AddonConfig, CliError> {
    let session = open_session(manager.store())?;
    let config = session.sync_once(manager)?;
    print_save_summary(&config, manager.requests());
    Ok(config)
}
