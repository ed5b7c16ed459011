//! Generated name records.
//!
//! - [`entities::NameRecord`] — a stored generation result
//! - [`entities::ParsedName`] — provider output split into fields
//! - [`parsing::parse_response`] — total, label-based parser

pub mod entities;
pub mod parsing;
