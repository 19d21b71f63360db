//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// missing records). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input broke one of the item rules. Carries the user-facing message.
    #[error("{0}")]
    Validation(String),

    /// An identifier lookup found nothing. Carries the user-facing message.
    #[error("{0}")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// The message carried by either variant.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg) | Self::NotFound(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_message() {
        let err = DomainError::validation("name must not be empty.");
        assert_eq!(err.to_string(), "name must not be empty.");
        assert_eq!(err.message(), "name must not be empty.");
    }

    #[test]
    fn not_found_keeps_its_message() {
        let err = DomainError::not_found("Barang dengan ID 7 tidak ditemukan.");
        assert!(matches!(err, DomainError::NotFound(_)));
        assert_eq!(err.message(), "Barang dengan ID 7 tidak ditemukan.");
    }
}
