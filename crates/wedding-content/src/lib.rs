//! DynamoDB content store.
//!
//! This crate provides:
//! - The `ContentStore` seam the request handler reads through
//! - A DynamoDB implementation over the singleton `WeddingData` record
//! - Write and table provisioning operations used by the admin CLI

pub mod client;
pub mod error;
pub mod table;

pub use client::{ContentStore, DynamoContentStore};
pub use error::{ContentError, ContentResult};
pub use table::TableCreation;
