//! In-memory sync target table edited by the settings session.

use crate::error::{Error, Result};
use crate::models::{DeckPath, PageId, RowChange, SyncTargetRow, UpdateMode};
use crate::util::required_text;

/// Ordered list of sync target rows.
///
/// Row edits are validated as they happen; the cross-row deck check runs
/// over the whole snapshot at save time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncTargetTable {
    rows: Vec<SyncTargetRow>,
}

impl SyncTargetTable {
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Build the table from persisted rows, normalizing each one.
    pub fn from_stored(rows: impl IntoIterator<Item = SyncTargetRow>) -> Self {
        Self {
            rows: rows.into_iter().map(SyncTargetRow::from_stored).collect(),
        }
    }

    pub fn rows(&self) -> &[SyncTargetRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Copy of the current rows, ready to go into a configuration.
    pub fn snapshot(&self) -> Vec<SyncTargetRow> {
        self.rows.clone()
    }

    /// Validate user input and append a row with the default flags.
    ///
    /// Both fields must be non-blank before any format check runs. On error
    /// the table is left unchanged.
    pub fn add_row(&mut self, page_id: &str, target_deck: &str) -> Result<&SyncTargetRow> {
        let page_id = required_text(page_id).ok_or(Error::EmptyField("Notion page id"))?;
        let target_deck =
            required_text(target_deck).ok_or(Error::EmptyField("Target deck name"))?;

        let deck: DeckPath = target_deck.parse()?;
        let page_id: PageId = page_id.parse()?;

        tracing::debug!(%page_id, %deck, "Adding sync target row");
        self.rows.push(SyncTargetRow::new(page_id, deck));
        Ok(&self.rows[self.rows.len() - 1])
    }

    /// Remove the selected row. `None` means nothing is selected.
    pub fn delete_row(&mut self, selected: Option<usize>) -> Result<SyncTargetRow> {
        let index = selected.ok_or(Error::NoRowSelected)?;
        self.check_index(index)?;
        Ok(self.rows.remove(index))
    }

    /// Apply one flag edit to a row.
    pub fn update_row(&mut self, index: usize, change: RowChange) -> Result<&SyncTargetRow> {
        self.check_index(index)?;
        self.rows[index] = self.rows[index].apply(change);
        Ok(&self.rows[index])
    }

    /// Set the update mode of a row; `None` turns sync off for it.
    pub fn set_row_mode(
        &mut self,
        index: usize,
        mode: Option<UpdateMode>,
    ) -> Result<&SyncTargetRow> {
        self.check_index(index)?;
        self.rows[index] = self.rows[index].with_mode(mode);
        Ok(&self.rows[index])
    }

    /// Switch every row to `mode`, clearing the other mode.
    pub fn select_all(&mut self, mode: UpdateMode) {
        for row in &mut self.rows {
            *row = row.apply(RowChange::enable(mode));
        }
    }

    /// Stable ascending sort by target deck.
    pub fn sort_by_deck(&mut self) {
        self.rows.sort_by(|left, right| left.target_deck.cmp(&right.target_deck));
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(Error::RowOutOfRange {
                index,
                len: self.rows.len(),
            })
        }
    }
}
