//! Single-file session snapshot.

use super::{io_error, write_atomic};
use debate_application::{SessionSnapshot, SessionStore, StoreError};
use std::path::{Path, PathBuf};

/// [`SessionStore`] keeping the snapshot in one JSON file
pub struct JsonSessionStore {
    path: PathBuf,
}

impl JsonSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for JsonSessionStore {
    fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        let json =
            serde_json::to_string_pretty(snapshot).map_err(|source| StoreError::Malformed {
                path: self.path.display().to_string(),
                source,
            })?;
        write_atomic(&self.path, &json)
    }

    fn load(&self) -> Result<Option<SessionSnapshot>, StoreError> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error(&self.path, e)),
        };

        serde_json::from_str(&json)
            .map(Some)
            .map_err(|source| StoreError::Malformed {
                path: self.path.display().to_string(),
                source,
            })
    }

    fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(&self.path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use debate_domain::{DebateConfig, DebateState, RoundCount};

    fn snapshot() -> SessionSnapshot {
        let config = DebateConfig::new("Cities", "Pro", "Con", RoundCount::Seven).unwrap();
        SessionSnapshot::new(DebateState::new(config, "Welcome"))
    }

    #[test]
    fn test_round_trip_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSessionStore::new(dir.path().join("nested/session.json"));

        assert_eq!(store.load().unwrap(), None);

        let snapshot = snapshot();
        store.save(&snapshot).unwrap();
        assert_eq!(store.load().unwrap(), Some(snapshot));
        assert!(!dir.path().join("nested/session.json.tmp").exists());

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_snapshot_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "garbage").unwrap();

        let store = JsonSessionStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Malformed { .. })));
    }
}
