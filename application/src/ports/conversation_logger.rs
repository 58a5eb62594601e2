//! Port for the structured debate transcript.
//!
//! [`ConversationLogger`] records what happened in a debate (prompts sent,
//! analyses received, rounds accepted or rejected, verdicts, saves) as
//! machine-readable events, separate from `tracing` diagnostics.

use serde_json::Value;

/// Event type names written to the transcript.
pub mod event {
    pub const DEBATE_STARTED: &str = "debate_started";
    pub const ROUND_ANALYZED: &str = "round_analyzed";
    pub const ROUND_REJECTED: &str = "round_rejected";
    pub const DEBATE_ENDED_EARLY: &str = "debate_ended_early";
    pub const VERDICT_GENERATED: &str = "verdict_generated";
    pub const LLM_ERROR: &str = "llm_error";
    pub const RECORD_SAVED: &str = "record_saved";
}

/// A structured transcript event.
///
/// The logger adds the timestamp when it writes the event.
#[derive(Debug, Clone)]
pub struct ConversationEvent {
    pub event_type: &'static str,
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Sink for transcript events.
///
/// `log` is synchronous and infallible: a transcript problem must never
/// interrupt a debate.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// Drops every event.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
