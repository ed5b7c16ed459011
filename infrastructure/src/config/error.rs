//! Configuration errors

use thiserror::Error;

/// Errors raised while loading configuration at startup
///
/// All variants are fatal: the process stops before any UI is shown.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing API key: set the {env} environment variable (or provider.api_key)")]
    MissingApiKey { env: String },

    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Failed to initialize provider client: {0}")]
    Client(String),
}
