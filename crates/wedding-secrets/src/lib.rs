//! AWS Secrets Manager client.
//!
//! This crate provides:
//! - The `SecretStore` seam the request handler authenticates through
//! - A Secrets Manager implementation that classifies failures into
//!   "not found" and "unavailable"

pub mod client;
pub mod error;

pub use client::{SecretStore, SecretsManagerStore};
pub use error::{SecretsError, SecretsResult};
