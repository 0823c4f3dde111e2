//! Save-time check that no deck mixes absolute and incremental updates.

use std::collections::{BTreeSet, HashMap};

use crate::error::{Error, Result};
use crate::models::{SyncTargetRow, UpdateMode};

/// Collect, per deck, the set of update modes used by any row targeting it.
///
/// Decks are returned in the order they first appear in `rows`. Decks whose
/// rows are all "no sync" get an empty set.
pub fn deck_modes(rows: &[SyncTargetRow]) -> Vec<(&str, BTreeSet<UpdateMode>)> {
    let mut order: Vec<(&str, BTreeSet<UpdateMode>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for row in rows {
        let slot = *index.entry(row.target_deck.as_str()).or_insert_with(|| {
            order.push((row.target_deck.as_str(), BTreeSet::new()));
            order.len() - 1
        });
        order[slot].1.extend(row.modes());
    }

    order
}

/// Names of decks that receive more than one update mode.
pub fn find_deck_conflicts(rows: &[SyncTargetRow]) -> Vec<String> {
    deck_modes(rows)
        .into_iter()
        .filter(|(_, modes)| modes.len() > 1)
        .map(|(deck, _)| deck.to_string())
        .collect()
}

/// Fail with every conflicting deck listed if the table is inconsistent.
pub fn check_deck_conflicts(rows: &[SyncTargetRow]) -> Result<()> {
    let decks = find_deck_conflicts(rows);
    if decks.is_empty() {
        Ok(())
    } else {
        tracing::debug!(?decks, "Rejecting sync targets with conflicting deck modes");
        Err(Error::ConflictingDeckSync { decks })
    }
}
