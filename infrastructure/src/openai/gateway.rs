//! OpenAI-compatible Generation Gateway implementation

use super::protocol::{ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::config::{ConfigError, FileProviderConfig};
use async_trait::async_trait;
use petname_application::ports::generation_gateway::{GatewayError, GenerationGateway};
use petname_domain::Creativity;
use petname_domain::util::log_preview;
use tracing::{debug, info, warn};

const USER_AGENT: &str = concat!("petname-studio/", env!("CARGO_PKG_VERSION"));

/// Gateway for OpenAI's chat completions API (and compatible servers)
///
/// No client-side timeout is configured; a hung provider blocks the caller
/// until the connection drops.
pub struct OpenAiGateway {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl OpenAiGateway {
    /// Create a gateway for `base_url` (with or without a trailing `/v1`)
    pub fn new(
        api_key: impl Into<String>,
        base_url: &str,
        model: impl Into<String>,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: Self::endpoint_for(base_url),
            model: model.into(),
            api_key: api_key.into(),
        })
    }

    /// Create a gateway from the `[provider]` config, resolving the API key
    /// from the environment.
    ///
    /// Fails with [`ConfigError::MissingApiKey`] when no key is available.
    pub fn from_config(config: &FileProviderConfig) -> Result<Self, ConfigError> {
        let api_key = config.resolve_api_key()?;
        Self::with_key(config, api_key)
    }

    /// Create a gateway from the `[provider]` config with an already
    /// resolved key
    pub fn with_key(config: &FileProviderConfig, api_key: String) -> Result<Self, ConfigError> {
        let gateway = Self::new(api_key, &config.base_url, config.model.clone())
            .map_err(|e| ConfigError::Client(e.to_string()))?;
        info!(
            "OpenAiGateway initialized (model: {}, endpoint: {})",
            gateway.model, gateway.endpoint
        );
        Ok(gateway)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn endpoint_for(base_url: &str) -> String {
        let base = base_url.trim().trim_end_matches('/');
        if base.ends_with("/v1") {
            format!("{}/chat/completions", base)
        } else {
            format!("{}/v1/chat/completions", base)
        }
    }
}

#[async_trait]
impl GenerationGateway for OpenAiGateway {
    async fn generate(&self, prompt: &str, creativity: Creativity) -> Result<String, GatewayError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage::user(prompt)],
            temperature: creativity.value(),
        };

        debug!(
            model = %self.model,
            temperature = %creativity,
            "Calling chat completions API"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|body| body.error.message)
                .unwrap_or_else(|_| log_preview(&text, 200));
            warn!("Provider returned {}: {}", status, message);
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&text).map_err(|e| {
            warn!("Undecodable provider response ({}): {}", e, log_preview(&text, 200));
            GatewayError::EmptyResponse
        })?;

        let content = parsed.into_text().ok_or(GatewayError::EmptyResponse)?;
        debug!("Provider answered: {}", log_preview(&content, 120));
        Ok(content)
    }

    fn describe(&self) -> String {
        format!("{} via {}", self.model, self.endpoint)
    }
}
