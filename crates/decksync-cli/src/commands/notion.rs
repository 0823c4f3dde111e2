use decksync_core::util::normalize_text_option;
use decksync_core::ConfigStore;

use crate::cli::NotionCommands;
use crate::commands::common::{open_session, save_session};
use crate::error::CliError;

pub fn run_notion(command: NotionCommands, store: &ConfigStore) -> Result<(), CliError> {
    match command {
        NotionCommands::Set { token, namespace } => run_notion_set(token, namespace, store),
    }
}

pub fn run_notion_set(
    token: Option<String>,
    namespace: Option<String>,
    store: &ConfigStore,
) -> Result<(), CliError> {
    if token.is_none() && namespace.is_none() {
        return Err(CliError::EmptyNotionChange);
    }

    let mut session = open_session(store)?;
    if let Some(token) = token {
        session.notion.token = normalize_text_option(Some(token)).unwrap_or_default();
    }
    if let Some(namespace) = namespace {
        session.notion.namespace = normalize_text_option(Some(namespace)).unwrap_or_default();
    }
    save_session(&session, store)?;
    Ok(())
}
