use decksync_core::{AddonConfig, ConfigStore, SettingsSession, SyncTargetRow};
use serde::Serialize;

use crate::error::CliError;
use crate::manager::{FileAddonManager, SyncRequest};

#[derive(Debug, Serialize)]
pub struct PageListItem {
    pub row: usize,
    pub page_id: String,
    pub target_deck: String,
    pub recursive: bool,
    pub mode: Option<String>,
}

pub fn open_session(store: &ConfigStore) -> Result<SettingsSession, CliError> {
    let config = store.load()?;
    Ok(SettingsSession::open(&config))
}

/// Save the session through the file manager and report what happened.
pub fn save_session(
    session: &SettingsSession,
    store: &ConfigStore,
) -> Result<AddonConfig, CliError> {
    let mut manager = FileAddonManager::new(store.clone());
    let config = session.save(&mut manager)?;
    print_save_summary(&config, manager.requests());
    Ok(config)
}

pub fn print_save_summary(config: &AddonConfig, requests: &[SyncRequest]) {
    println!("Saved {} page(s)", config.notion_pages.len());
    for request in requests {
        match request {
            SyncRequest::Auto => println!(
                "Auto sync every {} minute(s)",
                config.sync_every_minutes.minutes()
            ),
            SyncRequest::Once => println!("Sync requested"),
        }
    }
}

/// Convert a 1-based row number from the command line.
pub fn row_index(row: usize) -> Result<usize, CliError> {
    row.checked_sub(1).ok_or(CliError::InvalidRowNumber)
}

pub fn mode_label(row: &SyncTargetRow) -> &'static str {
    row.update_mode().map_or("no sync", |mode| mode.as_str())
}

pub fn page_to_list_item(index: usize, row: &SyncTargetRow) -> PageListItem {
    PageListItem {
        row: index + 1,
        page_id: row.page_id.clone(),
        target_deck: row.target_deck.clone(),
        recursive: row.recursive,
        mode: row.update_mode().map(|mode| mode.to_string()),
    }
}

pub fn format_page_line(index: usize, row: &SyncTargetRow) -> String {
    let recursive = if row.recursive { ", recursive" } else { "" };
    format!(
        "{:>3}  {}  ->  {}  ({}{})",
        index + 1,
        row.page_id,
        row.target_deck,
        mode_label(row),
        recursive
    )
}

pub fn format_page_lines(rows: &[SyncTargetRow]) -> Vec<String> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| format_page_line(index, row))
        .collect()
}
