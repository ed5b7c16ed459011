//! Generation request entity

use super::value_objects::{Creativity, NameStyle};
use crate::core::error::DomainError;
use serde::Serialize;
use std::collections::BTreeSet;

/// Structured user selections for one name generation (Entity)
///
/// Validated on construction and immutable afterwards: the builder methods
/// consume `self` and there are no setters. Pet type, color and traits are
/// normalized to trimmed lowercase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pet_type: String,
    color: String,
    personality_traits: BTreeSet<String>,
    style: NameStyle,
    creativity: Creativity,
}

impl GenerationRequest {
    /// Create a request with default style and creativity
    ///
    /// Fails with [`DomainError::Validation`] when the pet type or color is
    /// blank.
    pub fn new(pet_type: impl AsRef<str>, color: impl AsRef<str>) -> Result<Self, DomainError> {
        let pet_type = normalize(pet_type.as_ref());
        let color = normalize(color.as_ref());

        if pet_type.is_empty() {
            return Err(DomainError::validation("pet type cannot be empty"));
        }
        if color.is_empty() {
            return Err(DomainError::validation("pet color cannot be empty"));
        }

        Ok(Self {
            pet_type,
            color,
            personality_traits: BTreeSet::new(),
            style: NameStyle::default(),
            creativity: Creativity::default(),
        })
    }

    /// Add personality traits; blank entries are dropped
    pub fn with_traits<I, S>(mut self, traits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.personality_traits.extend(
            traits
                .into_iter()
                .map(|t| normalize(t.as_ref()))
                .filter(|t| !t.is_empty()),
        );
        self
    }

    pub fn with_style(mut self, style: NameStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_creativity(mut self, creativity: Creativity) -> Self {
        self.creativity = creativity;
        self
    }

    pub fn pet_type(&self) -> &str {
        &self.pet_type
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn personality_traits(&self) -> &BTreeSet<String> {
        &self.personality_traits
    }

    pub fn style(&self) -> NameStyle {
        self.style
    }

    pub fn creativity(&self) -> Creativity {
        self.creativity
    }

    /// Short human-readable label, e.g. "brown dog"
    pub fn subject(&self) -> String {
        format!("{} {}", self.color, self.pet_type)
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_normalizes_inputs() {
        let request = GenerationRequest::new("  Dog ", "Brown").unwrap();
        assert_eq!(request.pet_type(), "dog");
        assert_eq!(request.color(), "brown");
        assert_eq!(request.subject(), "brown dog");
    }

    #[test]
    fn test_blank_pet_type_is_rejected() {
        let err = GenerationRequest::new("   ", "brown").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("pet type"));
    }

    #[test]
    fn test_blank_color_is_rejected() {
        let err = GenerationRequest::new("cat", "").unwrap_err();
        assert!(err.to_string().contains("color"));
    }

    #[test]
    fn test_traits_are_deduplicated_and_trimmed() {
        let request = GenerationRequest::new("cat", "black")
            .unwrap()
            .with_traits(["Lazy", " lazy", "", "curious"]);
        let traits: Vec<_> = request.personality_traits().iter().cloned().collect();
        assert_eq!(traits, vec!["curious".to_string(), "lazy".to_string()]);
    }

    #[test]
    fn test_defaults() {
        let request = GenerationRequest::new("fish", "golden").unwrap();
        assert_eq!(request.style(), NameStyle::Classic);
        assert_eq!(request.creativity(), Creativity::default());
        assert!(request.personality_traits().is_empty());
    }
}
