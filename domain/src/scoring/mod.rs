//! Scoring domain
//!
//! Extraction of structured round scores from free-form analysis text.
//! The matching strategy sits behind [`ScoreExtractor`] so it can be
//! replaced without touching the round state machine.

pub mod parsing;

pub use parsing::{MarkerScoreExtractor, SCORE_MARKER, ScoreExtractor, parse_scores};
