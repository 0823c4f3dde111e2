//! Data models for decksync

mod deck;
mod page_id;
mod sync_target;

pub use deck::{DeckPath, DECK_SEPARATOR};
pub use page_id::{PageId, PAGE_ID_LEN};
pub use sync_target::{RowChange, SyncTargetRow, UpdateMode};
