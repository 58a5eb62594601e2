//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod debate;
mod llm;
mod logging;
mod output;
mod storage;

pub use debate::FileDebateConfig;
pub use llm::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL, FileLlmConfig};
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use storage::{FileStorageConfig, data_dir, expand_home};

use super::validation::{ConfigIssue, ConfigValidationError};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// LLM provider settings
    pub llm: FileLlmConfig,
    /// Debate behavior
    pub debate: FileDebateConfig,
    /// Where records and the session snapshot are kept
    pub storage: FileStorageConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Transcript and log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.debate.parse_default_rounds().1);

        if self.llm.model.trim().is_empty() {
            issues.push(ConfigIssue::error(ConfigValidationError::EmptyModelName));
        }

        let base_url = self.llm.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            issues.push(ConfigIssue::error(ConfigValidationError::InvalidBaseUrl(
                self.llm.base_url.clone(),
            )));
        }

        if self.llm.api_key_env.trim().is_empty() && self.llm.api_key.is_none() {
            issues.push(ConfigIssue::error(ConfigValidationError::EmptyApiKeyEnv));
        }

        if let Some(t) = self.llm.temperature
            && !(0.0..=2.0).contains(&t)
        {
            issues.push(ConfigIssue::error(
                ConfigValidationError::InvalidTemperature(t),
            ));
        }

        issues
    }
}
