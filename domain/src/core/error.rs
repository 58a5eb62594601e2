//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Every variant is a synchronous rejection: the state the operation was
/// applied to is left exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Debate topic cannot be empty")]
    EmptyTopic,

    #[error("Participant name cannot be empty")]
    EmptyPartyName,

    #[error("Participants must have different names (both are '{0}')")]
    DuplicatePartyName(String),

    #[error("Invalid round count {0}: must be 3, 5 or 7")]
    InvalidRoundCount(u32),

    #[error("Both parties must provide arguments before analysis (missing: {0})")]
    MissingArgument(String),

    #[error("The debate can only be ended early after at least one completed round")]
    EndTooEarly,

    #[error("The debate is already finished")]
    DebateFinished,

    #[error("The debate is still in progress")]
    DebateInProgress,

    #[error("Round {got} does not match the current round {expected}")]
    RoundMismatch { expected: u32, got: u32 },

    #[error("Invalid record key: {0}")]
    InvalidRecordKey(String),
}

impl DomainError {
    /// Whether this error came from validating user input (as opposed to
    /// the debate being in the wrong lifecycle state).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::EmptyTopic
                | DomainError::EmptyPartyName
                | DomainError::DuplicatePartyName(_)
                | DomainError::InvalidRoundCount(_)
                | DomainError::MissingArgument(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument_display() {
        let error = DomainError::MissingArgument("Beta".to_string());
        assert_eq!(
            error.to_string(),
            "Both parties must provide arguments before analysis (missing: Beta)"
        );
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::EmptyTopic.is_validation());
        assert!(DomainError::InvalidRoundCount(4).is_validation());
        assert!(!DomainError::EndTooEarly.is_validation());
        assert!(!DomainError::DebateFinished.is_validation());
    }
}
