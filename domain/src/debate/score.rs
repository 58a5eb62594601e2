//! Per-round scores (Value Objects)

use serde::{Deserialize, Serialize};

/// Highest value the analysis prompt asks the model to give a category.
pub const MAX_CATEGORY_SCORE: u32 = 10;

/// One party's score for one round.
///
/// `total` is always the sum of the four categories; it is recomputed on
/// construction and on deserialization, never trusted from input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawRoundScore")]
pub struct RoundScore {
    pub argument: u32,
    pub evidence: u32,
    pub rebuttal: u32,
    pub clarity: u32,
    pub total: u32,
}

#[derive(Deserialize)]
struct RawRoundScore {
    argument: u32,
    evidence: u32,
    rebuttal: u32,
    clarity: u32,
}

impl From<RawRoundScore> for RoundScore {
    fn from(raw: RawRoundScore) -> Self {
        RoundScore::new(raw.argument, raw.evidence, raw.rebuttal, raw.clarity)
    }
}

impl RoundScore {
    pub fn new(argument: u32, evidence: u32, rebuttal: u32, clarity: u32) -> Self {
        Self {
            argument,
            evidence,
            rebuttal,
            clarity,
            total: argument
                .saturating_add(evidence)
                .saturating_add(rebuttal)
                .saturating_add(clarity),
        }
    }

    /// The all-zero score used when a score block cannot be read.
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Whether every category lies within `0..=10`.
    ///
    /// Out-of-range values are kept as the model wrote them; this only
    /// reports them.
    pub fn is_within_range(&self) -> bool {
        [self.argument, self.evidence, self.rebuttal, self.clarity]
            .iter()
            .all(|v| *v <= MAX_CATEGORY_SCORE)
    }
}

/// Scores for both parties in one round, in speaking order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorePair {
    pub party1: RoundScore,
    pub party2: RoundScore,
}

impl ScorePair {
    pub fn new(party1: RoundScore, party2: RoundScore) -> Self {
        Self { party1, party2 }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}
