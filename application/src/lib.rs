//! Application layer for debate-host
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway},
    progress::{NoProgress, ProgressNotifier},
    record_store::{RecordStore, StoreError},
    session_store::{SessionSnapshot, SessionStore},
};
pub use use_cases::archive_debate::{ArchiveDebateUseCase, ArchiveError};
pub use use_cases::resume_session::ResumeSessionUseCase;
pub use use_cases::run_debate::{
    DebateOrchestrator, RejectedTransition, RoundOutcome, RoundSubmission, Verdict,
};
