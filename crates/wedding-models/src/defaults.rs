//! Fixed resource identifiers.
//!
//! The handler and the admin CLI both address the same singleton resources;
//! these are the names they use unless overridden by configuration.

use std::time::Duration;

/// Secrets Manager secret holding `{"password": "..."}`.
pub const PASSWORD_SECRET_NAME: &str = "wedding-site-password";

/// DynamoDB table holding the content record.
pub const CONTENT_TABLE: &str = "WeddingData";

/// Partition key value of the one and only content record.
pub const CONTENT_RECORD_ID: &str = "main";

/// S3 bucket holding gallery photos.
pub const PHOTO_BUCKET: &str = "wedding-website-photos";

/// Upper bound on objects requested from a single bucket listing.
pub const MAX_LISTED_PHOTOS: i32 = 100;

/// Lifetime of a presigned photo URL.
pub const PHOTO_URL_EXPIRY: Duration = Duration::from_secs(3600);
