//! Generation defaults from TOML (`[generation]` section)

use super::ConfigWarning;
use petname_domain::{Creativity, NameStyle};
use serde::{Deserialize, Serialize};

/// Starting values for the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Default creativity (0.0 - 1.0)
    pub creativity: f32,
    /// Default naming style
    pub style: NameStyle,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self {
            creativity: Creativity::DEFAULT,
            style: NameStyle::default(),
        }
    }
}

impl FileGenerationConfig {
    /// Validated creativity, falling back to the default when out of range
    pub fn parse_creativity(&self) -> (Creativity, Option<ConfigWarning>) {
        match Creativity::new(self.creativity) {
            Ok(c) => (c, None),
            Err(e) => (
                Creativity::default(),
                Some(ConfigWarning::new(
                    "generation.creativity",
                    format!("{}, falling back to {}", e, Creativity::DEFAULT),
                )),
            ),
        }
    }
}
