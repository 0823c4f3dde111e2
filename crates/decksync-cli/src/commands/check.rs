use decksync_core::{ConfigStore, SettingsSession};

use crate::error::CliError;

pub fn run_check(store: &ConfigStore) -> Result<(), CliError> {
    let stored = store.load()?;
    let session = SettingsSession::open(&stored);

    let disabled = stored
        .notion_pages
        .iter()
        .zip(session.table.rows())
        .filter(|(before, after)| before != after)
        .count();
    if disabled > 0 {
        println!("{disabled} row(s) enable both update modes and will not sync");
    }

    let config = session.build_config()?;
    let auto_sync = if config.sync_every_minutes.is_enabled() {
        format!("every {} minute(s)", config.sync_every_minutes.minutes())
    } else {
        "off".to_string()
    };
    println!(
        "Configuration is valid ({} page(s), auto sync {auto_sync})",
        config.notion_pages.len()
    );
    Ok(())
}
