//! Provider configuration from TOML (`[provider]` section)

use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};

/// OpenAI-compatible provider settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Environment variable holding the API key (default: "OPENAI_API_KEY")
    pub api_key_env: String,
    /// Direct API key (not recommended — use the env var instead)
    pub api_key: Option<String>,
    /// Base URL of the API (override for proxies or compatible servers)
    pub base_url: String,
    /// Chat model to request
    pub model: String,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-4o-mini".to_string(),
        }
    }
}

impl FileProviderConfig {
    /// Resolve the API key from the process environment
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Resolve the API key with a custom variable lookup.
    ///
    /// The environment variable wins over `api_key`. Blank values count as
    /// missing.
    pub fn resolve_api_key_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<String, ConfigError> {
        lookup(&self.api_key_env)
            .or_else(|| self.api_key.clone())
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::MissingApiKey {
                env: self.api_key_env.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_key_is_used() {
        let config = FileProviderConfig::default();
        let key = config
            .resolve_api_key_with(|name| (name == "OPENAI_API_KEY").then(|| "sk-env".to_string()))
            .unwrap();
        assert_eq!(key, "sk-env");
    }

    #[test]
    fn test_env_key_wins_over_file_key() {
        let config = FileProviderConfig {
            api_key: Some("sk-file".to_string()),
            ..Default::default()
        };
        let key = config
            .resolve_api_key_with(|_| Some("sk-env".to_string()))
            .unwrap();
        assert_eq!(key, "sk-env");
    }

    #[test]
    fn test_file_key_is_fallback() {
        let config = FileProviderConfig {
            api_key: Some("sk-file".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key_with(|_| None).unwrap(), "sk-file");
    }

    #[test]
    fn test_missing_key_is_configuration_error() {
        let config = FileProviderConfig::default();
        let err = config.resolve_api_key_with(|_| None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey { ref env } if env == "OPENAI_API_KEY"));
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let config = FileProviderConfig::default();
        assert!(config.resolve_api_key_with(|_| Some("   ".to_string())).is_err());
    }

    #[test]
    fn test_custom_env_name() {
        let config = FileProviderConfig {
            api_key_env: "PETS_KEY".to_string(),
            ..Default::default()
        };
        let err = config.resolve_api_key_with(|_| None).unwrap_err();
        assert!(err.to_string().contains("PETS_KEY"));
    }
}
