//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] — domain-level errors (request validation)

pub mod error;
