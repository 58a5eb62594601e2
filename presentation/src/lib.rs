//! Presentation layer for debate-host
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive debate REPL.

pub mod cli;
pub mod config;
pub mod debate;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, NewArgs, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use debate::DebateRepl;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
