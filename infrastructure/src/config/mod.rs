//! Configuration loading for petname-studio
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PETNAME_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./petname.toml` or `./.petname.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/petname-studio/config.toml`
//! 5. Default values

mod error;
mod file_config;
mod loader;

pub use error::ConfigError;
pub use file_config::{
    ConfigWarning, FileConfig, FileGenerationConfig, FileOutputConfig, FileProviderConfig,
    FileStudioConfig,
};
pub use loader::ConfigLoader;
