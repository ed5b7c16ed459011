//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Raised before any side effect happens, so a failed validation never
/// touches the session store or the provider.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid request: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }

    /// Check if this error came from request validation
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let error = DomainError::validation("pet type cannot be empty");
        assert_eq!(error.to_string(), "Invalid request: pet type cannot be empty");
    }

    #[test]
    fn test_is_validation_check() {
        assert!(DomainError::validation("x").is_validation());
    }
}
