//! Prompt domain
//!
//! Templates for the three model calls of a debate: opening statement,
//! per-round analysis with scoring, and final verdict.

mod template;

pub use template::PromptTemplate;
