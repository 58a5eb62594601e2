//! Round record (Entity)

use super::score::{RoundScore, ScorePair};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed round: both arguments, the analysis text and the parsed scores.
///
/// Records are append-only; once pushed into a debate's history they are
/// never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    pub party1_argument: String,
    pub party2_argument: String,
    pub analysis_text: String,
    pub party1_score: RoundScore,
    pub party2_score: RoundScore,
    pub timestamp: DateTime<Utc>,
}

impl RoundRecord {
    pub fn new(
        round: u32,
        party1_argument: impl Into<String>,
        party2_argument: impl Into<String>,
        analysis_text: impl Into<String>,
        scores: ScorePair,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            round,
            party1_argument: party1_argument.into(),
            party2_argument: party2_argument.into(),
            analysis_text: analysis_text.into(),
            party1_score: scores.party1,
            party2_score: scores.party2,
            timestamp,
        }
    }

    pub fn scores(&self) -> ScorePair {
        ScorePair::new(self.party1_score, self.party2_score)
    }

    /// True when the analysis carried no readable score block.
    pub fn is_unscored(&self) -> bool {
        self.party1_score.is_zero() && self.party2_score.is_zero()
    }
}
