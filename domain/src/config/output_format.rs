//! Output format value object

use serde::{Deserialize, Serialize};

/// How a generated record is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Name, explanation, fun fact and nicknames (default)
    #[default]
    Full,
    /// Only the name
    Name,
    /// JSON output
    Json,
}
