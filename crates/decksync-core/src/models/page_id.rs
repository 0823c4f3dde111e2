//! Notion page identifier

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::validation::normalize_page_id;

/// Length of a page id once `-` separators are removed.
pub const PAGE_ID_LEN: usize = 32;

/// A page id that passed normalization.
///
/// Only the length is checked. Any 32 characters are accepted, hex or not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    /// Get the normalized identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PageId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_page_id(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphenated_and_plain_forms_parse_to_same_id() {
        let hyphenated: PageId = "18cc2a7c-7ba7-4d2b-9b3f-dd9f83d591e1".parse().unwrap();
        let plain: PageId = "18cc2a7c7ba74d2b9b3fdd9f83d591e1".parse().unwrap();
        assert_eq!(hyphenated, plain);
        assert_eq!(plain.as_str().len(), PAGE_ID_LEN);
    }

    #[test]
    fn short_id_is_rejected() {
        assert!("18cc2a7c".parse::<PageId>().is_err());
    }
}
