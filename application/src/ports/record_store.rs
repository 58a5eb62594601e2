//! Record store port
//!
//! Persistence of finished debates as JSON blobs keyed by timestamp.

use debate_domain::{DebateRecordBlob, RecordKey};
use thiserror::Error;

/// Errors from record and session persistence
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Record not found: {0}")]
    NotFound(String),
}

/// Write-once, read-many store of debate records.
///
/// Last write wins: no locking, no transactions. A failed save never
/// affects the in-memory debate, which stays authoritative.
pub trait RecordStore: Send + Sync {
    /// Persist a record and return the key it was stored under.
    ///
    /// The key derives from the record's timestamp; implementations must
    /// pick a fresh key rather than overwrite an existing record.
    fn save(&self, blob: &DebateRecordBlob) -> Result<RecordKey, StoreError>;

    /// All stored keys, most recent first.
    fn list(&self) -> Result<Vec<RecordKey>, StoreError>;

    /// Read one record back.
    fn load(&self, key: &RecordKey) -> Result<DebateRecordBlob, StoreError>;
}
