//! Application-level configuration.
//!
//! Controls how the debate use cases behave around persistence.

use debate_domain::RoundCount;

/// Application behavior configuration.
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// Round count offered when the user does not choose one.
    pub default_rounds: RoundCount,
    /// Snapshot the session after every successful transition.
    pub autosave_session: bool,
    /// Save the record as soon as a verdict has been generated.
    pub auto_export: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            default_rounds: RoundCount::Three,
            autosave_session: true,
            auto_export: false,
        }
    }
}
