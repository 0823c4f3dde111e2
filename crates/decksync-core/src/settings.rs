//! Settings session: the editable state behind the settings form.
//!
//! A session is opened from the stored configuration, edited in memory and
//! either saved as one new configuration or dropped. Nothing reaches the
//! manager unless the whole table passes the deck conflict check.

use crate::auto_sync::AutoSyncSwitch;
use crate::config::{AddonConfig, NotionInfo};
use crate::error::{Error, Result};
use crate::manager::AddonManager;
use crate::table::SyncTargetTable;
use crate::util::required_text;
use crate::validation::{check_deck_conflicts, SyncInterval};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsSession {
    debug: bool,
    pub table: SyncTargetTable,
    pub notion: NotionInfo,
    pub auto_sync: AutoSyncSwitch,
}

impl SettingsSession {
    /// Open a session over a stored configuration.
    pub fn open(config: &AddonConfig) -> Self {
        tracing::info!(pages = config.notion_pages.len(), "Opening settings session");
        Self {
            debug: config.debug,
            table: SyncTargetTable::from_stored(config.notion_pages.iter().cloned()),
            notion: NotionInfo::from_config(config),
            auto_sync: AutoSyncSwitch::from_interval(config.sync_every_minutes),
        }
    }

    /// Set the interval field from raw text.
    pub fn set_interval_text(&mut self, raw: &str) -> Result<()> {
        let interval = SyncInterval::parse(raw)?;
        self.auto_sync.set_field(interval);
        Ok(())
    }

    /// Validate the session and produce the configuration it would save.
    ///
    /// Credentials are not carried over: login state lives with the manager.
    pub fn build_config(&self) -> Result<AddonConfig> {
        let pages = self.table.snapshot();
        check_deck_conflicts(&pages)?;

        Ok(AddonConfig {
            debug: self.debug,
            notion_pages: pages,
            user_email: String::new(),
            user_password: String::new(),
            sync_every_minutes: self.auto_sync.stored_interval(),
            notion_token: self.notion.token.clone(),
            notion_namespace: self.notion.namespace.clone(),
        })
    }

    /// Save through the manager, starting auto-sync when an interval is set.
    pub fn save<M: AddonManager + ?Sized>(&self, manager: &mut M) -> Result<AddonConfig> {
        let config = match self.build_config() {
            Ok(config) => config,
            Err(error) => {
                tracing::warn!(%error, "Settings rejected");
                return Err(error);
            }
        };

        manager.update_config(&config)?;
        if config.sync_every_minutes.is_enabled() {
            tracing::info!(
                minutes = config.sync_every_minutes.minutes(),
                "Starting auto sync"
            );
            manager.auto_sync()?;
        }
        Ok(config)
    }

    /// Save, then ask the manager for one immediate sync.
    pub fn sync_once<M: AddonManager + ?Sized>(&self, manager: &mut M) -> Result<AddonConfig> {
        let config = self.save(manager)?;
        tracing::info!("Sync once");
        manager.sync()?;
        Ok(config)
    }

    pub fn login<M: AddonManager + ?Sized>(
        &self,
        manager: &mut M,
        email: &str,
        password: &str,
    ) -> Result<()> {
        let email = required_text(email).ok_or(Error::EmptyField("Email"))?;
        if password.is_empty() {
            return Err(Error::EmptyField("Password"));
        }
        manager.handle_login(email, password)
    }

    pub fn logout<M: AddonManager + ?Sized>(&self, manager: &mut M) -> Result<()> {
        manager.handle_logout()
    }
}
