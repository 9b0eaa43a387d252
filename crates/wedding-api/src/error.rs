//! API error types.
//!
//! `Display` of each variant is the exact message returned to the browser in
//! `{"error": ...}`.

use lambda_http::http::StatusCode;
use thiserror::Error;

use wedding_content::ContentError;
use wedding_secrets::SecretsError;

use crate::envelope::Envelope;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Missing request body")]
    MissingBody,

    #[error("Invalid JSON format")]
    InvalidJson,

    #[error("Password is required")]
    PasswordRequired,

    #[error("Authentication configuration error")]
    AuthConfiguration,

    #[error("Authentication service unavailable")]
    AuthUnavailable,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Wedding data not configured")]
    ContentNotConfigured,

    #[error("Database service unavailable")]
    DatabaseUnavailable,

    #[error("Wedding content not found")]
    ContentNotFound,

    #[error("Wedding content is empty")]
    ContentEmpty,

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingBody | ApiError::InvalidJson | ApiError::PasswordRequired => {
                StatusCode::BAD_REQUEST
            }
            ApiError::InvalidPassword => StatusCode::UNAUTHORIZED,
            ApiError::AuthConfiguration
            | ApiError::AuthUnavailable
            | ApiError::ContentNotConfigured
            | ApiError::DatabaseUnavailable
            | ApiError::ContentNotFound
            | ApiError::ContentEmpty
            | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// True for failures caused by the caller rather than the deployment.
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl From<SecretsError> for ApiError {
    fn from(err: SecretsError) -> Self {
        if err.is_not_found() {
            ApiError::AuthConfiguration
        } else {
            ApiError::AuthUnavailable
        }
    }
}

impl From<ContentError> for ApiError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::NotFound(_) => ApiError::ContentNotConfigured,
            // A record that cannot be decoded is bad data, not a service fault.
            ContentError::Malformed(_) => ApiError::Internal,
            ContentError::Unavailable(_)
            | ContentError::WriteFailed(_)
            | ContentError::TableSetup(_) => ApiError::DatabaseUnavailable,
        }
    }
}

impl From<ApiError> for Envelope {
    fn from(err: ApiError) -> Self {
        Envelope::error(err.status_code(), &err.to_string())
    }
}
