//! Logging configuration from TOML (`[logging]` section)

use super::storage::{data_dir, expand_home};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write a JSONL transcript of each debate
    pub transcript: bool,
    /// Directory for transcripts (defaults to `<data dir>/transcripts`)
    pub transcript_dir: Option<String>,
    /// Directory for daily-rolling diagnostic log files; unset disables them
    pub file_dir: Option<String>,
}

impl FileLoggingConfig {
    pub fn transcript_dir(&self) -> PathBuf {
        self.transcript_dir
            .as_deref()
            .map(expand_home)
            .unwrap_or_else(|| data_dir().join("transcripts"))
    }

    pub fn file_dir(&self) -> Option<PathBuf> {
        self.file_dir.as_deref().map(expand_home)
    }
}
