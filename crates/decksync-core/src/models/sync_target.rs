//! Sync target row model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{DeckPath, PageId};

/// How a deck is refreshed from its page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateMode {
    /// Full resync; local cards missing upstream are deleted
    Absolute,
    /// Additive resync; nothing local is deleted
    Incremental,
}

impl UpdateMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::Incremental => "incremental",
        }
    }
}

impl fmt::Display for UpdateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpdateMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "absolute" => Ok(Self::Absolute),
            "incremental" => Ok(Self::Incremental),
            other => Err(format!("unknown update mode '{other}'")),
        }
    }
}

/// A single user edit to a row's flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowChange {
    SetRecursive(bool),
    SetAbsolute(bool),
    SetIncremental(bool),
}

impl RowChange {
    /// The change that checks the box for `mode`.
    pub const fn enable(mode: UpdateMode) -> Self {
        match mode {
            UpdateMode::Absolute => Self::SetAbsolute(true),
            UpdateMode::Incremental => Self::SetIncremental(true),
        }
    }
}

/// One row of the sync target table: a page mapped onto a deck
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncTargetRow {
    /// Notion page id
    pub page_id: String,
    /// Target deck, levels separated by `::`
    pub target_deck: String,
    /// Include descendant pages
    pub recursive: bool,
    /// Full resync mode
    pub absolute_update: bool,
    /// Additive resync mode
    pub incremental_update: bool,
}

impl SyncTargetRow {
    /// Create a row for a freshly added target with the default flags:
    /// recursive, incremental.
    pub fn new(page_id: PageId, target_deck: DeckPath) -> Self {
        Self {
            page_id: page_id.into_inner(),
            target_deck: target_deck.into_inner(),
            recursive: true,
            absolute_update: false,
            incremental_update: true,
        }
    }

    /// Normalize a row read from persisted configuration.
    ///
    /// A row with both update modes set is turned into a "no sync" row rather
    /// than guessing which one was meant.
    #[must_use]
    pub fn from_stored(mut row: Self) -> Self {
        if row.absolute_update && row.incremental_update {
            tracing::warn!(
                page_id = %row.page_id,
                deck = %row.target_deck,
                "Stored row enables both update modes; disabling sync for it"
            );
            row.absolute_update = false;
            row.incremental_update = false;
        }
        row
    }

    /// Apply one interactive edit, returning the new row state.
    ///
    /// Checking one update mode clears the other. Unchecking only touches
    /// the flag itself.
    #[must_use]
    pub fn apply(&self, change: RowChange) -> Self {
        let mut next = self.clone();
        match change {
            RowChange::SetRecursive(value) => next.recursive = value,
            RowChange::SetAbsolute(value) => {
                next.absolute_update = value;
                if value {
                    next.incremental_update = false;
                }
            }
            RowChange::SetIncremental(value) => {
                next.incremental_update = value;
                if value {
                    next.absolute_update = false;
                }
            }
        }
        next
    }

    /// Replace the update mode; `None` means "do not sync this row".
    #[must_use]
    pub fn with_mode(&self, mode: Option<UpdateMode>) -> Self {
        match mode {
            Some(mode) => self.apply(RowChange::enable(mode)),
            None => self
                .apply(RowChange::SetAbsolute(false))
                .apply(RowChange::SetIncremental(false)),
        }
    }

    /// The update modes this row turns on.
    pub fn modes(&self) -> impl Iterator<Item = UpdateMode> {
        [
            self.absolute_update.then_some(UpdateMode::Absolute),
            self.incremental_update.then_some(UpdateMode::Incremental),
        ]
        .into_iter()
        .flatten()
    }

    /// The single update mode of a normalized row, or `None` for "no sync".
    pub fn update_mode(&self) -> Option<UpdateMode> {
        match (self.absolute_update, self.incremental_update) {
            (true, false) => Some(UpdateMode::Absolute),
            (false, true) => Some(UpdateMode::Incremental),
            _ => None,
        }
    }
}
