//! Session snapshot port
//!
//! Lets an interactive debate survive a crash or a closed terminal: the
//! whole [`DebateState`] is written out after each successful transition
//! and read back by `resume`.

use super::record_store::StoreError;
use debate_domain::DebateState;
use serde::{Deserialize, Serialize};

/// Everything needed to pick a debate back up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub state: DebateState,
    /// Verdict text once one has been generated
    #[serde(default)]
    pub verdict: Option<String>,
    /// Key of the saved record, once exported
    #[serde(default)]
    pub saved_as: Option<String>,
}

impl SessionSnapshot {
    pub fn new(state: DebateState) -> Self {
        Self {
            state,
            verdict: None,
            saved_as: None,
        }
    }
}

/// Storage for the single current session.
pub trait SessionStore: Send + Sync {
    fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StoreError>;

    /// The stored snapshot, or `None` when there is none.
    fn load(&self) -> Result<Option<SessionSnapshot>, StoreError>;

    /// Remove the stored snapshot; a missing snapshot is not an error.
    fn clear(&self) -> Result<(), StoreError>;
}
