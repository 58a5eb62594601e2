//! LLM Gateway port
//!
//! Defines the interface for the text-generation capability a debate uses.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Missing API key: set {0} or configure llm.api_key")]
    MissingApiKey(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Model returned no text (finish reason: {finish_reason})")]
    EmptyResponse { finish_reason: String },

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM text generation
///
/// One prompt in, one block of text out. There are no sessions, retries
/// or timeouts at this boundary; callers turn a failure into substitute
/// text and let the user re-trigger the action.
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Identifier of the model behind this gateway (for logs and transcripts)
    fn model_name(&self) -> &str;

    /// Generate a completion for a single prompt
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;
}
