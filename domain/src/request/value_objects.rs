//! Value objects carried by a generation request

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How adventurous the provider should be (Value Object)
///
/// Forwarded verbatim as the provider's temperature. Always within
/// `[0.0, 1.0]`; NaN is rejected.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Creativity(f32);

impl Creativity {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 1.0;
    pub const DEFAULT: f32 = 0.7;

    pub fn new(value: f32) -> Result<Self, DomainError> {
        if value.is_nan() || !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DomainError::validation(format!(
                "creativity must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Default for Creativity {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<f32> for Creativity {
    type Error = DomainError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Creativity> for f32 {
    fn from(creativity: Creativity) -> Self {
        creativity.0
    }
}

impl fmt::Display for Creativity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Naming style requested by the user (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameStyle {
    #[default]
    Classic,
    Cute,
    Funny,
    Elegant,
    Mythical,
    Foodie,
    Unique,
}

impl NameStyle {
    pub const ALL: [NameStyle; 7] = [
        NameStyle::Classic,
        NameStyle::Cute,
        NameStyle::Funny,
        NameStyle::Elegant,
        NameStyle::Mythical,
        NameStyle::Foodie,
        NameStyle::Unique,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NameStyle::Classic => "classic",
            NameStyle::Cute => "cute",
            NameStyle::Funny => "funny",
            NameStyle::Elegant => "elegant",
            NameStyle::Mythical => "mythical",
            NameStyle::Foodie => "foodie",
            NameStyle::Unique => "unique",
        }
    }

    /// One-line steering sentence placed in the prompt
    pub fn directive(&self) -> &'static str {
        match self {
            NameStyle::Classic => "Prefer a timeless, traditional pet name.",
            NameStyle::Cute => "Prefer a sweet, affectionate name that sounds adorable.",
            NameStyle::Funny => "Prefer a playful, humorous name that makes people smile.",
            NameStyle::Elegant => "Prefer a refined, sophisticated name with some grace to it.",
            NameStyle::Mythical => {
                "Prefer a name drawn from mythology, legend or folklore."
            }
            NameStyle::Foodie => "Prefer a name inspired by food, treats or drinks.",
            NameStyle::Unique => "Prefer an unusual name that few other pets would have.",
        }
    }
}

impl fmt::Display for NameStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NameStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        NameStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == wanted)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "unknown style '{}', expected one of: {}",
                    s.trim(),
                    NameStyle::ALL
                        .iter()
                        .map(|style| style.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}
