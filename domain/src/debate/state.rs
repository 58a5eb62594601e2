//! Round state machine
//!
//! [`DebateState`] owns everything a running debate knows: its fixed
//! configuration, the host's opening statement, the append-only round
//! history and the cumulative totals.
//!
//! ```text
//!   DebateConfig ──start──▶ InProgress ──record_round (last round)──▶ Finished
//!                             │  ▲                                      ▲
//!                             └──┘ record_round                         │
//!                             └──────────── end_early (round > 1) ──────┘
//! ```
//!
//! Every transition validates first and mutates second, so a rejected
//! call leaves the state untouched.

use super::config::DebateConfig;
use super::phase::DebateStatus;
use super::round::RoundRecord;
use super::standing::Standing;
use crate::core::error::DomainError;
use crate::core::string::is_blank;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateState {
    config: DebateConfig,
    opening_statement: String,
    history: Vec<RoundRecord>,
    current_round: u32,
    finished: bool,
    party1_total: u32,
    party2_total: u32,
}

impl DebateState {
    /// A freshly started debate: round 1, no history, zero totals.
    pub fn new(config: DebateConfig, opening_statement: impl Into<String>) -> Self {
        Self {
            config,
            opening_statement: opening_statement.into(),
            history: Vec::new(),
            current_round: 1,
            finished: false,
            party1_total: 0,
            party2_total: 0,
        }
    }

    pub fn config(&self) -> &DebateConfig {
        &self.config
    }

    pub fn opening_statement(&self) -> &str {
        &self.opening_statement
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn status(&self) -> DebateStatus {
        if self.finished {
            DebateStatus::Finished
        } else {
            DebateStatus::InProgress
        }
    }

    pub fn party1_total(&self) -> u32 {
        self.party1_total
    }

    pub fn party2_total(&self) -> u32 {
        self.party2_total
    }

    pub fn rounds_completed(&self) -> usize {
        self.history.len()
    }

    /// Fraction of the scheduled rounds already completed, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        let completed = self.history.len() as f64;
        (completed / f64::from(self.config.max_rounds())).min(1.0)
    }

    pub fn standing(&self) -> Standing {
        Standing::from_totals(
            (self.config.party1_name(), self.party1_total),
            (self.config.party2_name(), self.party2_total),
        )
    }

    /// "End early" needs at least one completed round.
    pub fn can_end_early(&self) -> bool {
        !self.finished && self.current_round > 1
    }

    /// Check that a round may be submitted with these arguments.
    pub fn validate_round_input(
        &self,
        party1_argument: &str,
        party2_argument: &str,
    ) -> Result<(), DomainError> {
        if self.finished {
            return Err(DomainError::DebateFinished);
        }
        let missing: Vec<&str> = [
            (self.config.party1_name(), party1_argument),
            (self.config.party2_name(), party2_argument),
        ]
        .into_iter()
        .filter(|(_, argument)| is_blank(argument))
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::MissingArgument(missing.join(", ")))
        }
    }

    /// Append a completed round and advance.
    ///
    /// Adds the round's scores to the running totals, then either moves to
    /// the next round or, after the last scheduled round, finishes the debate.
    pub fn record_round(&mut self, record: RoundRecord) -> Result<(), DomainError> {
        self.validate_round_input(&record.party1_argument, &record.party2_argument)?;
        if record.round != self.current_round {
            return Err(DomainError::RoundMismatch {
                expected: self.current_round,
                got: record.round,
            });
        }

        self.party1_total = self.party1_total.saturating_add(record.party1_score.total);
        self.party2_total = self.party2_total.saturating_add(record.party2_score.total);
        self.history.push(record);

        if self.current_round < self.config.max_rounds() {
            self.current_round += 1;
        } else {
            self.finished = true;
        }
        Ok(())
    }

    /// Finish the debate before all scheduled rounds were played.
    pub fn end_early(&mut self) -> Result<(), DomainError> {
        if self.finished {
            return Err(DomainError::DebateFinished);
        }
        if self.current_round <= 1 {
            return Err(DomainError::EndTooEarly);
        }
        self.finished = true;
        Ok(())
    }

    /// Whether totals and round counter agree with the history.
    ///
    /// Used when a state comes back from a snapshot rather than from the
    /// transitions above.
    pub fn is_consistent(&self) -> bool {
        let (sum1, sum2) = self.history.iter().fold((0u32, 0u32), |(a, b), r| {
            (
                a.saturating_add(r.party1_score.total),
                b.saturating_add(r.party2_score.total),
            )
        });
        let rounds_in_order = self
            .history
            .iter()
            .enumerate()
            .all(|(i, r)| r.round as usize == i + 1);
        let completed = self.history.len() as u32;
        let max = self.config.max_rounds();

        let counter_ok = if self.finished {
            (1..=max).contains(&completed)
                && (self.current_round == completed || self.current_round == completed + 1)
        } else {
            completed < max && self.current_round == completed + 1
        };

        sum1 == self.party1_total && sum2 == self.party2_total && rounds_in_order && counter_ok
    }
}
