//! Validation of user-entered sync target fields and whole-table checks.

mod conflicts;
mod interval;

pub use conflicts::{check_deck_conflicts, deck_modes, find_deck_conflicts};
pub use interval::SyncInterval;

use crate::error::{DeckNameError, Error, Result};
use crate::models::{DECK_SEPARATOR, PAGE_ID_LEN};

/// Normalize a raw page id: trim, drop every `-`, require 32 characters.
///
/// ```
/// use decksync_core::validation::normalize_page_id;
///
/// let id = normalize_page_id(" 18cc2a7c-7ba7-4d2b-9b3f-dd9f83d591e1 ").unwrap();
/// assert_eq!(id, "18cc2a7c7ba74d2b9b3fdd9f83d591e1");
/// assert!(normalize_page_id("18cc2a7c").is_err());
/// ```
pub fn normalize_page_id(raw: &str) -> Result<String> {
    let normalized: String = raw.trim().chars().filter(|c| *c != '-').collect();
    let length = normalized.chars().count();
    if length != PAGE_ID_LEN {
        return Err(Error::InvalidPageId {
            value: raw.trim().to_string(),
            length,
        });
    }
    Ok(normalized)
}

/// Validate a raw deck name: trim, then reject a leading or trailing `::`.
///
/// ```
/// use decksync_core::validation::validate_deck_name;
///
/// assert_eq!(validate_deck_name(" math::algebra ").unwrap(), "math::algebra");
/// assert!(validate_deck_name("::math").is_err());
/// assert!(validate_deck_name("math::").is_err());
/// ```
pub fn validate_deck_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    let reason = if name.starts_with(DECK_SEPARATOR) {
        Some(DeckNameError::LeadingSeparator)
    } else if name.ends_with(DECK_SEPARATOR) {
        Some(DeckNameError::TrailingSeparator)
    } else {
        None
    };

    match reason {
        Some(reason) => Err(Error::InvalidDeckName {
            name: name.to_string(),
            reason,
        }),
        None => Ok(name.to_string()),
    }
}
