//! Output formatting for generated names and session lists

pub mod console;
