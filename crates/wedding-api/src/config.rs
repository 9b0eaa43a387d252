//! API configuration.

use std::time::Duration;

use wedding_models::{
    CONTENT_RECORD_ID, CONTENT_TABLE, MAX_LISTED_PHOTOS, PASSWORD_SECRET_NAME, PHOTO_BUCKET,
    PHOTO_URL_EXPIRY,
};

/// Content endpoint configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Secrets Manager secret holding the site password
    pub secret_name: String,
    /// DynamoDB table holding the content record
    pub content_table: String,
    /// Key of the content record
    pub content_record_id: String,
    /// S3 bucket holding gallery photos
    pub photo_bucket: String,
    /// Custom S3 endpoint (local emulators)
    pub s3_endpoint_url: Option<String>,
    /// Whether successful responses include the photo gallery
    pub photos_enabled: bool,
    /// Lifetime of presigned photo URLs
    pub photo_url_expiry: Duration,
    /// Maximum objects requested per bucket listing
    pub max_listed_photos: i32,
    /// Environment (development/production)
    pub environment: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            secret_name: PASSWORD_SECRET_NAME.to_string(),
            content_table: CONTENT_TABLE.to_string(),
            content_record_id: CONTENT_RECORD_ID.to_string(),
            photo_bucket: PHOTO_BUCKET.to_string(),
            s3_endpoint_url: None,
            photos_enabled: true,
            photo_url_expiry: PHOTO_URL_EXPIRY,
            max_listed_photos: MAX_LISTED_PHOTOS,
            environment: "development".to_string(),
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            secret_name: std::env::var("SECRET_NAME")
                .unwrap_or_else(|_| PASSWORD_SECRET_NAME.to_string()),
            content_table: std::env::var("CONTENT_TABLE")
                .unwrap_or_else(|_| CONTENT_TABLE.to_string()),
            content_record_id: std::env::var("CONTENT_RECORD_ID")
                .unwrap_or_else(|_| CONTENT_RECORD_ID.to_string()),
            photo_bucket: std::env::var("PHOTO_BUCKET")
                .unwrap_or_else(|_| PHOTO_BUCKET.to_string()),
            s3_endpoint_url: std::env::var("S3_ENDPOINT_URL")
                .ok()
                .filter(|s| !s.is_empty()),
            photos_enabled: std::env::var("PHOTOS_ENABLED")
                .map(|v| !matches!(v.to_lowercase().as_str(), "false" | "0" | "no" | "off"))
                .unwrap_or(true),
            photo_url_expiry: Duration::from_secs(
                std::env::var("PHOTO_URL_EXPIRY_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(PHOTO_URL_EXPIRY.as_secs()),
            ),
            max_listed_photos: std::env::var("MAX_LISTED_PHOTOS")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(MAX_LISTED_PHOTOS),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production mode.
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase() == "production"
    }
}
