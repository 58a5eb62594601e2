//! Debate domain
//!
//! The entities and value objects of a turn-based, two-party debate:
//!
//! - [`config::DebateConfig`]: topic, participants and round count
//! - [`score::RoundScore`]: four-category score for one party in one round
//! - [`round::RoundRecord`]: an immutable completed round
//! - [`state::DebateState`]: the round state machine
//! - [`standing::Standing`]: tie-break on cumulative totals

pub mod config;
pub mod phase;
pub mod round;
pub mod score;
pub mod standing;
pub mod state;

pub use config::{DebateConfig, RoundCount};
pub use phase::{DebatePhase, DebateStatus};
pub use round::RoundRecord;
pub use score::{MAX_CATEGORY_SCORE, RoundScore, ScorePair};
pub use standing::Standing;
pub use state::DebateState;
