//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod generation;
mod output;
mod provider;
mod studio;

pub use generation::FileGenerationConfig;
pub use output::FileOutputConfig;
pub use provider::FileProviderConfig;
pub use studio::FileStudioConfig;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-fatal problem found in the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted path of the offending field, e.g. `provider.model`
    pub field: String,
    pub message: String,
}

impl ConfigWarning {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Generation provider settings
    pub provider: FileProviderConfig,
    /// Form defaults
    pub generation: FileGenerationConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Interactive studio settings
    pub studio: FileStudioConfig,
}

impl FileConfig {
    /// Validate the configuration, returning every non-fatal issue.
    ///
    /// A missing API key is not reported here; it is fatal and surfaces
    /// from [`FileProviderConfig::resolve_api_key`].
    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if let (_, Some(warning)) = self.generation.parse_creativity() {
            warnings.push(warning);
        }

        if self.provider.model.trim().is_empty() {
            warnings.push(ConfigWarning::new("provider.model", "model name is empty"));
        }

        let base_url = self.provider.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            warnings.push(ConfigWarning::new(
                "provider.base_url",
                format!("'{}' is not an http(s) URL", base_url),
            ));
        }

        if self.provider.api_key.is_some() {
            warnings.push(ConfigWarning::new(
                "provider.api_key",
                format!(
                    "API key stored in a config file; prefer the {} environment variable",
                    self.provider.api_key_env
                ),
            ));
        }

        warnings
    }
}
