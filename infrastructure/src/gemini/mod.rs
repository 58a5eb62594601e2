//! Gemini adapter
//!
//! Implements LlmGateway over the Gemini `generateContent` REST endpoint.

pub mod error;
pub mod gateway;
pub mod protocol;
