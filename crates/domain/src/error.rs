//! Unified error types for the domain layer
//!
//! Absence (an unknown skill id, an unresolvable chain) is modeled with
//! `Option` on the lookup functions themselves; `DomainError` covers the
//! cases that are genuinely wrong input, such as parsing an unknown tier
//! or class name from configuration.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Create a validation error for business rule violations
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string doesn't
    /// match any known variant, e.g. an unknown tier or class name.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("starting skills cannot repeat");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: starting skills cannot repeat"
        );
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown tier: journeyman");
        assert!(matches!(err, DomainError::Parse(_)));
        assert_eq!(err.to_string(), "Parse error: Unknown tier: journeyman");
    }
}
