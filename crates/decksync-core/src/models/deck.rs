//! Hierarchical deck path

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::validation::validate_deck_name;

/// Separator between deck levels, e.g. `Languages::German`.
pub const DECK_SEPARATOR: &str = "::";

/// A deck name that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeckPath(String);

impl DeckPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DeckPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DeckPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_deck_name(s).map(Self)
    }
}
