//! Debate configuration from TOML (`[debate]` section)

use crate::config::{ConfigIssue, ConfigValidationError};
use debate_application::BehaviorConfig;
use debate_domain::RoundCount;
use serde::{Deserialize, Serialize};

/// Raw debate behavior configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDebateConfig {
    /// Rounds offered by default: 3, 5 or 7
    pub default_rounds: u32,
    /// Snapshot the session after each transition so `resume` can pick it up
    pub autosave_session: bool,
    /// Save the record right after the verdict without asking
    pub auto_export: bool,
}

impl Default for FileDebateConfig {
    fn default() -> Self {
        Self {
            default_rounds: RoundCount::default().get(),
            autosave_session: true,
            auto_export: false,
        }
    }
}

impl FileDebateConfig {
    /// Parse `default_rounds`, falling back to the default with a warning.
    pub fn parse_default_rounds(&self) -> (RoundCount, Vec<ConfigIssue>) {
        match RoundCount::try_from(self.default_rounds) {
            Ok(rounds) => (rounds, Vec::new()),
            Err(_) => (
                RoundCount::default(),
                vec![ConfigIssue::warning(ConfigValidationError::InvalidRoundCount(
                    self.default_rounds,
                ))],
            ),
        }
    }

    pub fn to_behavior_config(&self) -> BehaviorConfig {
        BehaviorConfig {
            default_rounds: self.parse_default_rounds().0,
            autosave_session: self.autosave_session,
            auto_export: self.auto_export,
        }
    }
}
