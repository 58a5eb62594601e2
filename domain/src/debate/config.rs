//! Debate configuration (Value Object)

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Number of rounds a debate runs for.
///
/// Only odd counts of 3, 5 or 7 are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum RoundCount {
    Three,
    Five,
    Seven,
}

impl RoundCount {
    pub const ALL: [RoundCount; 3] = [RoundCount::Three, RoundCount::Five, RoundCount::Seven];

    pub fn get(self) -> u32 {
        match self {
            RoundCount::Three => 3,
            RoundCount::Five => 5,
            RoundCount::Seven => 7,
        }
    }
}

impl Default for RoundCount {
    fn default() -> Self {
        RoundCount::Three
    }
}

impl TryFrom<u32> for RoundCount {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(RoundCount::Three),
            5 => Ok(RoundCount::Five),
            7 => Ok(RoundCount::Seven),
            other => Err(DomainError::InvalidRoundCount(other)),
        }
    }
}

impl From<RoundCount> for u32 {
    fn from(count: RoundCount) -> Self {
        count.get()
    }
}

impl std::fmt::Display for RoundCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl std::str::FromStr for RoundCount {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidRoundCount(0))?;
        RoundCount::try_from(value)
    }
}

/// Parameters of a debate, fixed once the debate starts.
///
/// Construct through [`DebateConfig::new`], which trims every field and
/// rejects empty or duplicate names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateConfig {
    topic: String,
    party1_name: String,
    party2_name: String,
    max_rounds: RoundCount,
}

impl DebateConfig {
    pub fn new(
        topic: impl Into<String>,
        party1_name: impl Into<String>,
        party2_name: impl Into<String>,
        max_rounds: RoundCount,
    ) -> Result<Self, DomainError> {
        let topic = topic.into().trim().to_string();
        let party1_name = party1_name.into().trim().to_string();
        let party2_name = party2_name.into().trim().to_string();

        if topic.is_empty() {
            return Err(DomainError::EmptyTopic);
        }
        if party1_name.is_empty() || party2_name.is_empty() {
            return Err(DomainError::EmptyPartyName);
        }
        // Names key the per-party score maps of exported records.
        if party1_name.eq_ignore_ascii_case(&party2_name) {
            return Err(DomainError::DuplicatePartyName(party1_name));
        }

        Ok(Self {
            topic,
            party1_name,
            party2_name,
            max_rounds,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn party1_name(&self) -> &str {
        &self.party1_name
    }

    pub fn party2_name(&self) -> &str {
        &self.party2_name
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds.get()
    }

    pub fn round_count(&self) -> RoundCount {
        self.max_rounds
    }

    /// Both participant names in speaking order.
    pub fn participants(&self) -> [&str; 2] {
        [&self.party1_name, &self.party2_name]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_trims_fields() {
        let config = DebateConfig::new("  AI in schools ", " Alpha", "Beta ", RoundCount::Three)
            .unwrap();
        assert_eq!(config.topic(), "AI in schools");
        assert_eq!(config.participants(), ["Alpha", "Beta"]);
        assert_eq!(config.max_rounds(), 3);
    }

    #[test]
    fn test_config_rejects_blank_fields() {
        assert_eq!(
            DebateConfig::new("   ", "Alpha", "Beta", RoundCount::Three),
            Err(DomainError::EmptyTopic)
        );
        assert_eq!(
            DebateConfig::new("Topic", "Alpha", "\n", RoundCount::Three),
            Err(DomainError::EmptyPartyName)
        );
    }

    #[test]
    fn test_config_rejects_same_names() {
        let err = DebateConfig::new("Topic", "Alpha", "alpha", RoundCount::Five).unwrap_err();
        assert!(matches!(err, DomainError::DuplicatePartyName(_)));
    }

    #[test]
    fn test_round_count_conversions() {
        assert_eq!(RoundCount::try_from(5).unwrap(), RoundCount::Five);
        assert_eq!(
            RoundCount::try_from(4),
            Err(DomainError::InvalidRoundCount(4))
        );
        assert_eq!("7".parse::<RoundCount>().unwrap(), RoundCount::Seven);
        assert!("seven".parse::<RoundCount>().is_err());
    }

    #[test]
    fn test_round_count_serializes_as_number() {
        assert_eq!(serde_json::to_string(&RoundCount::Seven).unwrap(), "7");
        let parsed: RoundCount = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, RoundCount::Three);
        assert!(serde_json::from_str::<RoundCount>("2").is_err());
    }
}
