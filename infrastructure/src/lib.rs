//! Infrastructure layer for petname-studio
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod openai;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, ConfigWarning, FileConfig, FileGenerationConfig, FileOutputConfig,
    FileProviderConfig, FileStudioConfig,
};
pub use openai::gateway::OpenAiGateway;
