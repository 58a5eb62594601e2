//! One JSON file per saved debate.

use super::{io_error, write_atomic};
use debate_application::{RecordStore, StoreError};
use debate_domain::{DebateRecordBlob, RecordKey};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// [`RecordStore`] writing `<dir>/<key>.json`
pub struct JsonRecordStore {
    dir: PathBuf,
}

impl JsonRecordStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &RecordKey) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl RecordStore for JsonRecordStore {
    fn save(&self, blob: &DebateRecordBlob) -> Result<RecordKey, StoreError> {
        let mut key = RecordKey::from_timestamp(blob.timestamp);
        while self.path_for(&key).exists() {
            key = key.next();
        }

        let path = self.path_for(&key);
        let json = blob.to_json().map_err(|source| StoreError::Malformed {
            path: path.display().to_string(),
            source,
        })?;
        write_atomic(&path, &json)?;

        debug!("Wrote {}", path.display());
        Ok(key)
    }

    fn list(&self) -> Result<Vec<RecordKey>, StoreError> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error(&self.dir, e)),
        };

        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| io_error(&self.dir, e))?;
            let name = entry.file_name();
            let Some(stem) = name.to_str().and_then(|n| n.strip_suffix(".json")) else {
                continue;
            };
            match stem.parse::<RecordKey>() {
                Ok(key) => keys.push(key),
                Err(_) => debug!("Skipping foreign file {:?}", name),
            }
        }

        keys.sort_by(|a, b| b.cmp(a));
        Ok(keys)
    }

    fn load(&self, key: &RecordKey) -> Result<DebateRecordBlob, StoreError> {
        let path = self.path_for(key);
        let json = match std::fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(key.to_string()));
            }
            Err(e) => return Err(io_error(&path, e)),
        };

        DebateRecordBlob::from_json(&json).map_err(|source| {
            warn!("Record {} is not valid JSON: {}", path.display(), source);
            StoreError::Malformed {
                path: path.display().to_string(),
                source,
            }
        })
    }
}
