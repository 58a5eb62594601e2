//! File-backed persistence
//!
//! Records are pretty-printed JSON files named after their [`RecordKey`];
//! the session snapshot is a single JSON file. Writes go to a temporary
//! sibling first and are renamed into place.
//!
//! [`RecordKey`]: debate_domain::RecordKey

mod json_record_store;
mod json_session_store;

pub use json_record_store::JsonRecordStore;
pub use json_session_store::JsonSessionStore;

use debate_application::StoreError;
use std::path::Path;

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Write `contents` to `path` via a temporary file in the same directory.
fn write_atomic(path: &Path, contents: &str) -> Result<(), StoreError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }

    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, contents).map_err(|e| io_error(&tmp, e))?;
    std::fs::rename(&tmp, path).map_err(|e| io_error(path, e))
}
