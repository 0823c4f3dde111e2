//! Error types for decksync-core

use thiserror::Error;

/// Result type alias using decksync-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Why a deck name was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckNameError {
    /// Name starts with `::`
    LeadingSeparator,
    /// Name ends with `::`
    TrailingSeparator,
}

impl std::fmt::Display for DeckNameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LeadingSeparator => f.write_str("deck name cannot start with '::'"),
            Self::TrailingSeparator => f.write_str("deck name cannot end with '::'"),
        }
    }
}

/// Errors that can occur in decksync-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// A required input was left blank
    #[error("{0} is required")]
    EmptyField(&'static str),

    /// Page id did not normalize to 32 characters
    #[error(
        "Invalid page id '{value}': must be 32 characters long, or 36 characters long with '-' (got {length})"
    )]
    InvalidPageId { value: String, length: usize },

    /// Deck name has a leading or trailing separator
    #[error("Invalid deck name '{name}': {reason}")]
    InvalidDeckName { name: String, reason: DeckNameError },

    /// Several rows target the same deck with different update modes
    #[error(
        "These decks have conflicting sync settings: `{}`, both absolute and incremental updates are enabled. Please choose only one.",
        .decks.join(", ")
    )]
    ConflictingDeckSync { decks: Vec<String> },

    /// Sync interval is not a non-negative integer
    #[error("Invalid sync interval '{0}': please input a valid number of minutes")]
    InvalidInterval(String),

    /// Delete requested without a selected row
    #[error("Please select a row")]
    NoRowSelected,

    /// Row index past the end of the table
    #[error("Row {index} does not exist (table has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether this error comes from user input rather than the environment.
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyField(_)
                | Self::InvalidPageId { .. }
                | Self::InvalidDeckName { .. }
                | Self::ConflictingDeckSync { .. }
                | Self::InvalidInterval(_)
                | Self::NoRowSelected
                | Self::RowOutOfRange { .. }
        )
    }
}
