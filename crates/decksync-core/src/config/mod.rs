//! Plugin configuration object and its JSON file store.
//!
//! `AddonConfig` is the single structure handed to the manager on save and
//! written to disk. Rows are stored exactly as saved; load-time row
//! normalization happens when a settings session is opened.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::SyncTargetRow;
use crate::validation::SyncInterval;

/// Full plugin configuration
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonConfig {
    #[serde(default)]
    pub debug: bool,
    #[serde(default)]
    pub notion_pages: Vec<SyncTargetRow>,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub user_password: String,
    #[serde(default)]
    pub sync_every_minutes: SyncInterval,
    #[serde(default)]
    pub notion_token: String,
    #[serde(default)]
    pub notion_namespace: String,
}

impl std::fmt::Debug for AddonConfig {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("AddonConfig")
            .field("debug", &self.debug)
            .field("notion_pages", &self.notion_pages)
            .field("user_email", &self.user_email)
            .field("user_password", &redact(&self.user_password))
            .field("sync_every_minutes", &self.sync_every_minutes)
            .field("notion_token", &redact(&self.notion_token))
            .field("notion_namespace", &self.notion_namespace)
            .finish()
    }
}

const fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        ""
    } else {
        "[REDACTED]"
    }
}

impl AddonConfig {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Notion credentials shown in the settings form
#[derive(Clone, Default, PartialEq, Eq)]
pub struct NotionInfo {
    pub token: String,
    pub namespace: String,
}

impl std::fmt::Debug for NotionInfo {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("NotionInfo")
            .field("token", &redact(&self.token))
            .field("namespace", &self.namespace)
            .finish()
    }
}

impl NotionInfo {
    pub fn from_config(config: &AddonConfig) -> Self {
        Self {
            token: config.notion_token.clone(),
            namespace: config.notion_namespace.clone(),
        }
    }
}

/// JSON file holding one `AddonConfig`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration, or defaults when the file does not exist yet.
    pub fn load(&self) -> Result<AddonConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No config file; using defaults");
            return Ok(AddonConfig::default());
        }

        let raw = std::fs::read_to_string(&self.path).map_err(|error| {
            Error::Config(format!(
                "Failed to read config at {}: {error}",
                self.path.display()
            ))
        })?;
        serde_json::from_str(&raw).map_err(|error| {
            Error::Config(format!(
                "Failed to parse config at {}: {error}",
                self.path.display()
            ))
        })
    }

    /// Replace the file with `config`.
    pub fn save(&self, config: &AddonConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|error| {
                    Error::Config(format!(
                        "Failed to create config directory {}: {error}",
                        parent.display()
                    ))
                })?;
            }
        }

        let serialized = config.to_json()?;
        std::fs::write(&self.path, serialized).map_err(|error| {
            Error::Config(format!(
                "Failed to write config at {}: {error}",
                self.path.display()
            ))
        })?;
        tracing::info!(
            path = %self.path.display(),
            pages = config.notion_pages.len(),
            "Config saved"
        );
        Ok(())
    }
}
