use std::path::PathBuf;

use decksync_core::validation::SyncInterval;
use decksync_core::{AddonConfig, AddonManager, ConfigStore, Error, SyncTargetRow, UpdateMode};
use pretty_assertions::assert_eq;

use crate::cli::{AuthCommands, AutoSyncCommands, ColumnArg, CompletionShell, ModeArg};
use crate::commands::auth_cmd::run_auth;
use crate::commands::auto_sync::run_auto_sync;
use crate::commands::check::run_check;
use crate::commands::common::{format_page_line, page_to_list_item, row_index};
use crate::commands::completions::render_completions;
use crate::commands::notion::run_notion_set;
use crate::commands::pages::{run_pages_add, run_pages_remove, run_pages_set};
use crate::commands::sync::run_sync_with;
use crate::config_path::resolve_config_path;
use crate::error::CliError;
use crate::manager::{FileAddonManager, SyncRequest};

const PAGE: &str = "18cc2a7c7ba74d2b9b3fdd9f83d591e1";

fn temp_store() -> (tempfile::TempDir, ConfigStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("config.json"));
    (dir, store)
}

fn row(deck: &str, absolute: bool, incremental: bool) -> SyncTargetRow {
    SyncTargetRow {
        page_id: PAGE.to_string(),
        target_deck: deck.to_string(),
        recursive: true,
        absolute_update: absolute,
        incremental_update: incremental,
    }
}

#[test]
fn row_index_is_one_based() {
    assert_eq!(row_index(1).unwrap(), 0);
    assert!(matches!(row_index(0), Err(CliError::InvalidRowNumber)));
}

#[test]
fn format_page_line_shows_mode_and_recursion() {
    let line = format_page_line(0, &row("math", false, true));
    assert!(line.contains("  1  "));
    assert!(line.contains("-> "));
    assert!(line.contains("(incremental, recursive)"));

    let line = format_page_line(4, &row("math", false, false));
    assert!(line.contains("no sync"));
}

#[test]
fn page_list_item_uses_row_numbers() {
    let item = page_to_list_item(2, &row("math", true, false));
    assert_eq!(item.row, 3);
    assert_eq!(item.mode.as_deref(), Some("absolute"));
}

#[test]
fn explicit_config_path_wins() {
    let path = PathBuf::from("/tmp/decksync-explicit.json");
    assert_eq!(resolve_config_path(Some(path.clone())).unwrap(), path);
}

#[test]
fn mode_args_map_to_update_modes() {
    assert_eq!(ModeArg::None.update_mode(), None);
    assert_eq!(ModeArg::Absolute.update_mode(), Some(UpdateMode::Absolute));
    assert_eq!(UpdateMode::from(ColumnArg::Incremental), UpdateMode::Incremental);
}

#[test]
fn completions_mention_binary_name() {
    let script = String::from_utf8(render_completions(CompletionShell::Bash)).unwrap();
    assert!(script.contains("decksync"));
}

#[test]
fn add_persists_normalized_row() {
    let (_dir, store) = temp_store();
    run_pages_add("18cc2a7c-7ba7-4d2b-9b3f-dd9f83d591e1", " math::algebra ", &store).unwrap();

    let config = store.load().unwrap();
    assert_eq!(config.notion_pages.len(), 1);
    assert_eq!(config.notion_pages[0].page_id, PAGE);
    assert_eq!(config.notion_pages[0].target_deck, "math::algebra");
}

#[test]
fn add_rejects_bad_deck_without_writing() {
    let (_dir, store) = temp_store();
    let error = run_pages_add(PAGE, "::math", &store).unwrap_err();
    assert!(matches!(
        error,
        CliError::Core(Error::InvalidDeckName { .. })
    ));
    assert!(!store.path().exists());
}

#[test]
fn conflicting_mode_change_leaves_file_untouched() {
    let (_dir, store) = temp_store();
    let original = AddonConfig {
        notion_pages: vec![row("math", true, false), row("math", false, false)],
        ..AddonConfig::default()
    };
    store.save(&original).unwrap();

    let error = run_pages_set(2, Some(Some(UpdateMode::Incremental)), None, &store).unwrap_err();
    assert!(matches!(
        error,
        CliError::Core(Error::ConflictingDeckSync { .. })
    ));
    assert_eq!(store.load().unwrap(), original);
}

#[test]
fn set_requires_a_change() {
    let (_dir, store) = temp_store();
    assert!(matches!(
        run_pages_set(1, None, None, &store),
        Err(CliError::EmptyRowChange)
    ));
}

#[test]
fn remove_without_row_reports_no_selection() {
    let (_dir, store) = temp_store();
    store
        .save(&AddonConfig {
            notion_pages: vec![row("math", true, false)],
            ..AddonConfig::default()
        })
        .unwrap();

    assert!(matches!(
        run_pages_remove(None, &store),
        Err(CliError::Core(Error::NoRowSelected))
    ));
    run_pages_remove(Some(1), &store).unwrap();
    assert!(store.load().unwrap().notion_pages.is_empty());
}

#[test]
fn disabling_auto_sync_stores_zero() {
    let (_dir, store) = temp_store();
    store
        .save(&AddonConfig {
            sync_every_minutes: SyncInterval::from_minutes(30),
            ..AddonConfig::default()
        })
        .unwrap();

    run_auto_sync(AutoSyncCommands::Disable, &store).unwrap();
    assert_eq!(store.load().unwrap().sync_every_minutes, SyncInterval::DISABLED);
}

#[test]
fn enable_auto_sync_rejects_non_numeric_minutes() {
    let (_dir, store) = temp_store();
    let error = run_auto_sync(
        AutoSyncCommands::Enable {
            minutes: Some("often".to_string()),
        },
        &store,
    )
    .unwrap_err();
    assert!(matches!(error, CliError::Core(Error::InvalidInterval(_))));

    run_auto_sync(
        AutoSyncCommands::Enable {
            minutes: Some("15".to_string()),
        },
        &store,
    )
    .unwrap();
    assert_eq!(store.load().unwrap().sync_every_minutes.minutes(), 15);
}

#[test]
fn notion_set_trims_values() {
    let (_dir, store) = temp_store();
    run_notion_set(Some(" secret ".to_string()), None, &store).unwrap();
    let config = store.load().unwrap();
    assert_eq!(config.notion_token, "secret");
    assert!(matches!(
        run_notion_set(None, None, &store),
        Err(CliError::EmptyNotionChange)
    ));
}

#[test]
fn check_reports_conflicts() {
    let (_dir, store) = temp_store();
    store
        .save(&AddonConfig {
            notion_pages: vec![row("math", true, false), row("math", false, true)],
            ..AddonConfig::default()
        })
        .unwrap();
    assert!(matches!(
        run_check(&store),
        Err(CliError::Core(Error::ConflictingDeckSync { .. }))
    ));
}

#[test]
fn sync_saves_and_records_request() {
    let (_dir, store) = temp_store();
    run_pages_add(PAGE, "bio", &store).unwrap();

    let mut manager = FileAddonManager::new(store.clone());
    let saved = run_sync_with(&mut manager).unwrap();

    assert_eq!(manager.requests(), &[SyncRequest::Once]);
    assert_eq!(saved.notion_pages, vec![row("bio", false, true)]);
    assert_eq!(store.load().unwrap().notion_pages, vec![row("bio", false, true)]);
}

#[test]
fn sync_with_interval_also_starts_auto_sync() {
    let (_dir, store) = temp_store();
    store
        .save(&AddonConfig {
            sync_every_minutes: SyncInterval::from_minutes(30),
            ..AddonConfig::default()
        })
        .unwrap();

    let mut manager = FileAddonManager::new(store.clone());
    run_sync_with(&mut manager).unwrap();
    assert_eq!(manager.requests(), &[SyncRequest::Auto, SyncRequest::Once]);
}

#[test]
fn sync_with_conflicting_decks_writes_nothing() {
    let (_dir, store) = temp_store();
    let original = AddonConfig {
        notion_pages: vec![row("math", true, false), row("math", false, true)],
        notion_token: "token".to_string(),
        ..AddonConfig::default()
    };
    store.save(&original).unwrap();
    let before = std::fs::read_to_string(store.path()).unwrap();

    let mut manager = FileAddonManager::new(store.clone());
    let error = run_sync_with(&mut manager).unwrap_err();

    assert!(matches!(
        error,
        CliError::Core(Error::ConflictingDeckSync { .. })
    ));
    assert!(manager.requests().is_empty());
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
}

#[test]
fn rejected_input_exits_with_usage_code() {
    let conflict = CliError::Core(Error::ConflictingDeckSync {
        decks: vec!["math".to_string()],
    });
    assert_eq!(conflict.exit_code(), 2);
    assert_eq!(CliError::InvalidRowNumber.exit_code(), 2);
    assert_eq!(CliError::Config("no config dir".to_string()).exit_code(), 1);
    assert_eq!(
        CliError::Core(Error::Config("unreadable".to_string())).exit_code(),
        1
    );
}

#[test]
fn saving_keeps_logged_in_credentials() {
    let (_dir, store) = temp_store();
    run_auth(
        AuthCommands::Login {
            email: " me@example.com ".to_string(),
            password: "pw".to_string(),
        },
        &store,
    )
    .unwrap();
    run_pages_add(PAGE, "bio", &store).unwrap();

    let config = store.load().unwrap();
    assert_eq!(config.user_email, "me@example.com");
    assert_eq!(config.user_password, "pw");
    assert_eq!(config.notion_pages.len(), 1);

    run_auth(AuthCommands::Logout, &store).unwrap();
    let config = store.load().unwrap();
    assert!(config.user_email.is_empty());
    assert!(config.user_password.is_empty());
}

#[test]
fn manager_update_config_writes_file() {
    let (_dir, store) = temp_store();
    let mut manager = FileAddonManager::new(store.clone());
    let config = AddonConfig {
        notion_namespace: "space".to_string(),
        ..AddonConfig::default()
    };
    manager.update_config(&config).unwrap();
    assert_eq!(manager.store().load().unwrap(), config);
    manager.auto_sync().unwrap();
    assert_eq!(manager.requests(), &[SyncRequest::Auto]);
}
