//! Auto-sync interval in minutes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Minutes between automatic syncs; zero disables auto-sync.
///
/// Deserializes from a JSON integer or from a string of ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawInterval", into = "u32")]
pub struct SyncInterval(u32);

impl SyncInterval {
    pub const DISABLED: Self = Self(0);

    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    pub const fn minutes(self) -> u32 {
        self.0
    }

    pub const fn is_enabled(self) -> bool {
        self.0 > 0
    }

    /// Parse a spin-box or stored string value. Only ASCII digits are
    /// accepted; signs, whitespace and decimals are rejected.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidInterval(raw.to_string()));
        }
        raw.parse::<u32>()
            .map(Self)
            .map_err(|_| Error::InvalidInterval(raw.to_string()))
    }
}

impl From<SyncInterval> for u32 {
    fn from(value: SyncInterval) -> Self {
        value.0
    }
}

impl fmt::Display for SyncInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SyncInterval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawInterval {
    Number(i64),
    Text(String),
}

impl TryFrom<RawInterval> for SyncInterval {
    type Error = Error;

    fn try_from(value: RawInterval) -> Result<Self, Self::Error> {
        match value {
            RawInterval::Number(number) => u32::try_from(number)
                .map(Self)
                .map_err(|_| Error::InvalidInterval(number.to_string())),
            RawInterval::Text(text) => Self::parse(&text),
        }
    }
}
