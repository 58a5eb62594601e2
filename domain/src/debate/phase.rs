//! Debate phases and lifecycle status

use serde::{Deserialize, Serialize};

/// The three kinds of model call a debate makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebatePhase {
    /// Host opening statement
    Opening,
    /// Per-round analysis with scoring
    Analysis,
    /// Final verdict
    Verdict,
}

impl DebatePhase {
    pub fn as_str(&self) -> &str {
        match self {
            DebatePhase::Opening => "opening",
            DebatePhase::Analysis => "analysis",
            DebatePhase::Verdict => "verdict",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            DebatePhase::Opening => "Opening Statement",
            DebatePhase::Analysis => "Round Analysis",
            DebatePhase::Verdict => "Final Verdict",
        }
    }

    /// Prefix put in front of the error description when the model call fails.
    pub fn failure_prefix(&self) -> &'static str {
        match self {
            DebatePhase::Opening => "Error generating opening statement",
            DebatePhase::Analysis => "Error analyzing arguments",
            DebatePhase::Verdict => "Error generating final verdict",
        }
    }
}

impl std::fmt::Display for DebatePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Lifecycle of a debate.
///
/// Setup happens before a [`DebateState`](super::state::DebateState) exists:
/// a state is born `InProgress` and ends `Finished`, which is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebateStatus {
    InProgress,
    Finished,
}
