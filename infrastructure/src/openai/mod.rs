//! OpenAI-compatible provider adapter.

pub mod gateway;
pub mod protocol;
