//! Domain layer for petname-studio
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Generation pipeline
//!
//! - **Request**: validated user selections ([`GenerationRequest`])
//! - **Prompt**: deterministic instruction text ([`PromptTemplate`])
//! - **Parsing**: total, label-based split of the provider answer ([`parse_response`])
//!
//! ## Session
//!
//! - **History**: every [`NameRecord`] generated this session, oldest first
//! - **Favorites**: user-picked subset of History ([`SessionStore`])

pub mod catalog;
pub mod config;
pub mod core;
pub mod prompt;
pub mod record;
pub mod request;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use prompt::PromptTemplate;
pub use record::{
    entities::{NameRecord, ParsedName, RecordId},
    parsing::{ResponseField, parse_response},
};
pub use request::{
    entities::GenerationRequest,
    value_objects::{Creativity, NameStyle},
};
pub use session::store::SessionStore;

/// Build the provider prompt for a request
pub fn build_prompt(request: &GenerationRequest) -> String {
    PromptTemplate::build_prompt(request)
}
