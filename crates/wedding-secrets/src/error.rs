//! Secret store error types.

use thiserror::Error;

/// Result type for secret store operations.
pub type SecretsResult<T> = Result<T, SecretsError>;

/// Failure categories of a secret lookup.
#[derive(Debug, Error)]
pub enum SecretsError {
    #[error("Secret not found: {0}")]
    NotFound(String),

    #[error("Secrets service unavailable: {0}")]
    Unavailable(String),
}

impl SecretsError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// True if the secret itself does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SecretsError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_found() {
        assert!(SecretsError::not_found("wedding-site-password").is_not_found());
        assert!(!SecretsError::unavailable("timeout").is_not_found());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            SecretsError::not_found("wedding-site-password").to_string(),
            "Secret not found: wedding-site-password"
        );
    }
}
