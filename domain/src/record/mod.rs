//! Debate records
//!
//! The persisted, write-once form of a finished debate and the
//! timestamp-derived key it is stored under.

mod blob;
mod key;

pub use blob::{DebateRecordBlob, HistoryEntry};
pub use key::RecordKey;
