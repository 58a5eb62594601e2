//! Exported form of a finished debate

use crate::core::error::DomainError;
use crate::debate::{DebateConfig, DebateState, RoundRecord, RoundScore, Standing};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One round as it appears in an exported record (and in the verdict prompt).
///
/// Carries the party names alongside the arguments so the entry reads on
/// its own, and keys the scores by party name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub round: u32,
    pub party1_name: String,
    pub party1_argument: String,
    pub party2_name: String,
    pub party2_argument: String,
    pub analysis: String,
    pub scores: BTreeMap<String, RoundScore>,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn from_round(config: &DebateConfig, record: &RoundRecord) -> Self {
        let scores = BTreeMap::from([
            (config.party1_name().to_string(), record.party1_score),
            (config.party2_name().to_string(), record.party2_score),
        ]);
        Self {
            round: record.round,
            party1_name: config.party1_name().to_string(),
            party1_argument: record.party1_argument.clone(),
            party2_name: config.party2_name().to_string(),
            party2_argument: record.party2_argument.clone(),
            analysis: record.analysis_text.clone(),
            scores,
            timestamp: record.timestamp,
        }
    }
}

/// A finished debate plus its final verdict, as written to the record store.
///
/// Write-once: built from a finished [`DebateState`], then only read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateRecordBlob {
    pub topic: String,
    pub participants: [String; 2],
    /// Rounds actually played (fewer than scheduled when ended early)
    pub rounds: u32,
    #[serde(default)]
    pub max_rounds: Option<u32>,
    pub final_scores: BTreeMap<String, u32>,
    pub round_scores: BTreeMap<String, Vec<RoundScore>>,
    #[serde(default)]
    pub opening_statement: String,
    pub history: Vec<HistoryEntry>,
    pub final_verdict: String,
    pub timestamp: DateTime<Utc>,
}

impl DebateRecordBlob {
    /// Export a finished debate.
    ///
    /// Rejects a debate that is still in progress.
    pub fn from_state(
        state: &DebateState,
        final_verdict: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if !state.is_finished() {
            return Err(DomainError::DebateInProgress);
        }

        let config = state.config();
        let (p1, p2) = (config.party1_name(), config.party2_name());

        let final_scores = BTreeMap::from([
            (p1.to_string(), state.party1_total()),
            (p2.to_string(), state.party2_total()),
        ]);
        let round_scores = BTreeMap::from([
            (
                p1.to_string(),
                state.history().iter().map(|r| r.party1_score).collect(),
            ),
            (
                p2.to_string(),
                state.history().iter().map(|r| r.party2_score).collect(),
            ),
        ]);

        Ok(Self {
            topic: config.topic().to_string(),
            participants: [p1.to_string(), p2.to_string()],
            rounds: state.rounds_completed() as u32,
            max_rounds: Some(config.max_rounds()),
            final_scores,
            round_scores,
            opening_statement: state.opening_statement().to_string(),
            history: state
                .history()
                .iter()
                .map(|record| HistoryEntry::from_round(config, record))
                .collect(),
            final_verdict: final_verdict.into(),
            timestamp,
        })
    }

    /// Final total for a participant, zero if the name is unknown.
    pub fn total_for(&self, name: &str) -> u32 {
        self.final_scores.get(name).copied().unwrap_or(0)
    }

    pub fn standing(&self) -> Standing {
        let [p1, p2] = &self.participants;
        Standing::from_totals(
            (p1.as_str(), self.total_for(p1)),
            (p2.as_str(), self.total_for(p2)),
        )
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
