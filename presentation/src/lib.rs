//! Presentation layer for petname-studio
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive studio.

pub mod cli;
pub mod output;
pub mod progress;
pub mod studio;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use studio::StudioRepl;
