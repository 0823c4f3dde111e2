use decksync_core::ConfigStore;

use crate::cli::AuthCommands;
use crate::commands::common::open_session;
use crate::error::CliError;
use crate::manager::FileAddonManager;

pub fn run_auth(command: AuthCommands, store: &ConfigStore) -> Result<(), CliError> {
    let session = open_session(store)?;
    let mut manager = FileAddonManager::new(store.clone());
    match command {
        AuthCommands::Login { email, password } => {
            session.login(&mut manager, &email, &password)?;
            println!("Logged in as {}", email.trim());
        }
        AuthCommands::Logout => {
            session.logout(&mut manager)?;
            println!("Logged out");
        }
    }
    Ok(())
}
