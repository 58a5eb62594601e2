//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod archive_debate;
pub mod resume_session;
pub mod run_debate;
