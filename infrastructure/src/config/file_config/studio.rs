//! Interactive studio configuration from TOML (`[studio]` section)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Raw studio (REPL) configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStudioConfig {
    /// Show the spinner while waiting for the provider
    pub show_progress: bool,
    /// Path to the readline history file (command lines only, not records)
    pub history_file: Option<String>,
}

impl Default for FileStudioConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl FileStudioConfig {
    /// Configured history file with a leading `~` expanded to the home directory
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_path_with(dirs::home_dir().as_deref())
    }

    /// Same as [`history_path`](Self::history_path) with an explicit home directory
    pub fn history_path_with(&self, home: Option<&Path>) -> Option<PathBuf> {
        let raw = self.history_file.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }

        let rest = if raw == "~" {
            Some("")
        } else {
            raw.strip_prefix("~/")
        };
        match (rest, home) {
            (Some(rest), Some(home)) => Some(home.join(rest)),
            _ => Some(PathBuf::from(raw)),
        }
    }
}
