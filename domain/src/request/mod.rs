//! Generation request subdomain.
//!
//! - [`entities::GenerationRequest`] — validated user selections
//! - [`value_objects::Creativity`] — provider temperature in `[0.0, 1.0]`
//! - [`value_objects::NameStyle`] — naming style directive

pub mod entities;
pub mod value_objects;
