//! Infrastructure layer for debate-host
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod logging;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, ConfigValidationError, FileConfig, FileDebateConfig,
    FileLlmConfig, FileLoggingConfig, FileOutputConfig, FileOutputFormat, FileStorageConfig,
    Severity,
};
pub use gemini::{error::GeminiError, gateway::GeminiGateway};
pub use logging::JsonlConversationLogger;
pub use storage::{JsonRecordStore, JsonSessionStore};
