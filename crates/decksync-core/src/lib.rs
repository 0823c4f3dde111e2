//! decksync-core - Core library for decksync
//!
//! Holds the sync target models, the validation rules that keep a table of
//! targets consistent, and the settings session that hands a validated
//! configuration to an external manager.

pub mod auto_sync;
pub mod config;
pub mod error;
pub mod manager;
pub mod models;
pub mod settings;
pub mod table;
pub mod util;
pub mod validation;

pub use config::{AddonConfig, ConfigStore};
pub use error::{DeckNameError, Error, Result};
pub use manager::AddonManager;
pub use models::{RowChange, SyncTargetRow, UpdateMode};
pub use settings::SettingsSession;
pub use table::SyncTargetTable;
