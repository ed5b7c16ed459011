//! Generation Gateway port
//!
//! Defines the interface for talking to the text-generation provider.

use async_trait::async_trait;
use petname_domain::Creativity;
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Provider returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Provider returned no usable text")]
    EmptyResponse,

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// True when the provider answered but the answer had nothing in it
    pub fn is_empty_response(&self) -> bool {
        matches!(self, GatewayError::EmptyResponse)
    }
}

/// Gateway to the generation provider
///
/// A pure pass-through: one prompt in, the provider's raw text out. It
/// performs no retries and enforces no timeout of its own.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait GenerationGateway: Send + Sync {
    /// Send `prompt` with `creativity` as the temperature and return the raw text
    async fn generate(&self, prompt: &str, creativity: Creativity) -> Result<String, GatewayError>;

    /// Human-readable provider/model label for display
    fn describe(&self) -> String {
        "generation provider".to_string()
    }
}
