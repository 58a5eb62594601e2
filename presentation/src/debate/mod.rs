//! Interactive debate session

mod command;
mod repl;

pub use command::{ReplCommand, ReplInput};
pub use repl::DebateRepl;
