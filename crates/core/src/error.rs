//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The quality update path itself is total and never produces one of these.
/// They surface only while assembling engine configuration (keyword tables,
/// quality bounds) before any item is touched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. empty keyword, inverted bounds).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Two entries claim the same identity (e.g. duplicate keyword).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Input could not be decoded at all.
    #[error("malformed input: {0}")]
    Malformed(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        assert_eq!(
            DomainError::validation("keyword cannot be empty").to_string(),
            "validation failed: keyword cannot be empty"
        );
        assert_eq!(
            DomainError::conflict("duplicate keyword `Conjured`").to_string(),
            "conflict: duplicate keyword `Conjured`"
        );
        assert_eq!(
            DomainError::malformed("expected value").to_string(),
            "malformed input: expected value"
        );
    }

    #[test]
    fn helpers_build_matching_variants() {
        assert!(matches!(DomainError::conflict("x"), DomainError::Conflict(m) if m == "x"));
        assert!(matches!(DomainError::validation("y"), DomainError::Validation(m) if m == "y"));
    }
}
