//! Password-gated content endpoint.
//!
//! This crate provides:
//! - The request handler behind the site's API Gateway route
//! - Response envelopes carrying the fixed CORS header set
//! - Error-to-status mapping for every failure the handler can hit
//! - Application state wiring the Secrets Manager, DynamoDB and S3 clients

pub mod auth;
pub mod config;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod invocation;
pub mod logging;
pub mod state;

pub use config::ApiConfig;
pub use envelope::{Envelope, CORS_HEADERS};
pub use error::{ApiError, ApiResult};
pub use handlers::get_content;
pub use invocation::Invocation;
pub use state::AppState;
