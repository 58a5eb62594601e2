//! Storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw storage configuration from TOML
///
/// Unset paths default to the platform data directory
/// (`~/.local/share/debate-host` on Linux).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Directory holding one JSON file per saved debate
    pub records_dir: Option<String>,
    /// Snapshot file of the in-progress debate
    pub session_file: Option<String>,
}

impl FileStorageConfig {
    pub fn records_dir(&self) -> PathBuf {
        self.records_dir
            .as_deref()
            .map(expand_home)
            .unwrap_or_else(|| data_dir().join("records"))
    }

    pub fn session_file(&self) -> PathBuf {
        self.session_file
            .as_deref()
            .map(expand_home)
            .unwrap_or_else(|| data_dir().join("session.json"))
    }
}

/// Base directory for everything debate-host writes by default
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("debate-host")
}

/// Expand a leading `~/` to the home directory
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_live_under_data_dir() {
        let config = FileStorageConfig::default();
        assert!(config.records_dir().ends_with("debate-host/records"));
        assert!(config.session_file().ends_with("debate-host/session.json"));
    }

    #[test]
    fn test_explicit_paths() {
        let config = FileStorageConfig {
            records_dir: Some("/tmp/records".to_string()),
            session_file: Some("relative/session.json".to_string()),
        };
        assert_eq!(config.records_dir(), PathBuf::from("/tmp/records"));
        assert_eq!(config.session_file(), PathBuf::from("relative/session.json"));
    }

    #[test]
    fn test_expand_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/debates"), home.join("debates"));
        }
        assert_eq!(expand_home("/abs/~/x"), PathBuf::from("/abs/~/x"));
    }
}
