//! Content store error types.

use thiserror::Error;

/// Result type for content store operations.
pub type ContentResult<T> = Result<T, ContentError>;

/// Errors that can occur during content store operations.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The table itself does not exist.
    #[error("Table not found: {0}")]
    NotFound(String),

    #[error("Database service unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed record: {0}")]
    Malformed(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Table setup failed: {0}")]
    TableSetup(String),
}

impl ContentError {
    pub fn not_found(table: impl Into<String>) -> Self {
        Self::NotFound(table.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn table_setup(msg: impl Into<String>) -> Self {
        Self::TableSetup(msg.into())
    }

    /// True if the backing table is missing (a deployment problem, not a transient fault).
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_missing_table_is_not_found() {
        assert!(ContentError::not_found("WeddingData").is_not_found());
        assert!(!ContentError::unavailable("throttled").is_not_found());
        assert!(!ContentError::Malformed("content: expected string".into()).is_not_found());
    }
}
