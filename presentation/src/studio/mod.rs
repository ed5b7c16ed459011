//! Interactive studio module
//!
//! Provides a REPL for generating names, keeping favorites and browsing
//! the session history.

pub mod command;
pub mod repl;

pub use command::{ReplCommand, parse_command};
pub use repl::{CommandResult, StudioRepl};
