//! Domain layer for debate-host
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Debate
//!
//! Two named parties argue a topic over 3, 5 or 7 rounds. After each round
//! a model analyzes both arguments and scores each party on four categories
//! (argument, evidence, rebuttal, clarity). Scores accumulate into totals;
//! after the last round (or an early end) a judge model gives a verdict.
//!
//! ## Lifecycle
//!
//! - **Setup**: a validated [`DebateConfig`]
//! - **In progress**: [`DebateState`] accepting rounds
//! - **Finished**: terminal; verdict and export may be repeated freely

pub mod config;
pub mod core;
pub mod debate;
pub mod prompt;
pub mod record;
pub mod scoring;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use debate::{
    DebateConfig, DebatePhase, DebateState, DebateStatus, MAX_CATEGORY_SCORE, RoundCount,
    RoundRecord, RoundScore, ScorePair, Standing,
};
pub use prompt::PromptTemplate;
pub use record::{DebateRecordBlob, HistoryEntry, RecordKey};
pub use scoring::{MarkerScoreExtractor, SCORE_MARKER, ScoreExtractor, parse_scores};
