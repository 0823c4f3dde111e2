//! File-backed manager used by the CLI.
//!
//! Saves go straight to the config file. Sync requests are only recorded;
//! the sync engine itself runs inside the host application.

use decksync_core::{AddonConfig, AddonManager, ConfigStore, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncRequest {
    Auto,
    Once,
}

#[derive(Debug)]
pub struct FileAddonManager {
    store: ConfigStore,
    requests: Vec<SyncRequest>,
}

impl FileAddonManager {
    pub const fn new(store: ConfigStore) -> Self {
        Self {
            store,
            requests: Vec::new(),
        }
    }

    pub const fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Sync requests received so far, oldest first.
    pub fn requests(&self) -> &[SyncRequest] {
        &self.requests
    }
}

impl AddonManager for FileAddonManager {
    /// Credentials already on disk are kept; the settings form never
    /// carries them.
    fn update_config(&mut self, config: &AddonConfig) -> Result<()> {
        let current = self.store.load()?;
        let merged = AddonConfig {
            user_email: current.user_email,
            user_password: current.user_password,
            ..config.clone()
        };
        self.store.save(&merged)
    }

    fn auto_sync(&mut self) -> Result<()> {
        tracing::info!("Auto sync requested");
        self.requests.push(SyncRequest::Auto);
        Ok(())
    }

    fn sync(&mut self) -> Result<()> {
        tracing::info!("Sync requested");
        self.requests.push(SyncRequest::Once);
        Ok(())
    }

    fn handle_login(&mut self, email: &str, password: &str) -> Result<()> {
        let mut config = self.store.load()?;
        config.user_email = email.to_string();
        config.user_password = password.to_string();
        self.store.save(&config)?;
        tracing::info!(email, "Logged in");
        Ok(())
    }

    fn handle_logout(&mut self) -> Result<()> {
        let mut config = self.store.load()?;
        config.user_email.clear();
        config.user_password.clear();
        self.store.save(&config)?;
        tracing::info!("Logged out");
        Ok(())
    }
}
