//! Shared data models for the wedding site backend.
//!
//! This crate provides Serde-serializable types for:
//! - The singleton content record stored in DynamoDB
//! - Photo gallery entries derived from the S3 bucket listing
//! - Response bodies returned by the content endpoint
//! - The fixed resource identifiers every component agrees on

pub mod content;
pub mod defaults;
pub mod photo;

pub use content::{ContentRecord, ContentResponse, ErrorResponse};
pub use defaults::{
    CONTENT_RECORD_ID, CONTENT_TABLE, MAX_LISTED_PHOTOS, PASSWORD_SECRET_NAME, PHOTO_BUCKET,
    PHOTO_URL_EXPIRY,
};
pub use photo::{format_timestamp, is_image_key, Photo, IMAGE_EXTENSIONS};
