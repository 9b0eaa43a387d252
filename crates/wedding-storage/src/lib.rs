//! S3 photo bucket client.
//!
//! This crate provides:
//! - The `PhotoStore` seam over bucket listing and presigned URL issuance
//! - An S3 implementation
//! - Gallery assembly (image filter, concurrent presigning, newest-first order)

pub mod client;
pub mod error;
pub mod operations;

pub use client::{ObjectInfo, PhotoStore, S3Config, S3PhotoClient};
pub use error::{StorageError, StorageResult};
pub use operations::list_photos;
