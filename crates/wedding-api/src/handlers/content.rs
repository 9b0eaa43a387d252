//! Content handler.
//!
//! Checks run in a fixed order and the first failure decides the response:
//! preflight, body, JSON, password field, secret lookup, secret contents,
//! password match, record lookup, record presence, record content, then the
//! optional photo gallery (which never fails the request).

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use lambda_http::http::StatusCode;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use wedding_models::{ContentResponse, Photo};
use wedding_storage::{list_photos, PhotoStore};

use crate::auth;
use crate::config::ApiConfig;
use crate::envelope::Envelope;
use crate::error::{ApiError, ApiResult};
use crate::invocation::Invocation;
use crate::state::AppState;

/// Serve the password-gated content.
///
/// Always returns an envelope: errors and panics inside the pipeline are
/// turned into error envelopes here.
pub async fn get_content(state: &AppState, invocation: Invocation) -> Envelope {
    if invocation.is_preflight() {
        debug!("Answering CORS preflight");
        return Envelope::preflight();
    }

    match AssertUnwindSafe(load_content(state, &invocation))
        .catch_unwind()
        .await
    {
        Ok(Ok(envelope)) => envelope,
        Ok(Err(err)) => {
            if err.is_client_error() {
                info!(status = err.status_code().as_u16(), error = %err, "Request rejected");
            } else {
                error!(status = err.status_code().as_u16(), error = %err, "Request failed");
            }
            err.into()
        }
        Err(_) => {
            error!("Unexpected panic while serving content");
            ApiError::Internal.into()
        }
    }
}

async fn load_content(state: &AppState, invocation: &Invocation) -> ApiResult<Envelope> {
    let body = invocation.body().ok_or(ApiError::MissingBody)?;

    let request: Value = serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, "Invalid JSON in request body");
        ApiError::InvalidJson
    })?;

    let submitted = auth::submitted_password(&request)?;
    debug!("Password received");

    let secret = state
        .secrets
        .secret_string(&state.config.secret_name)
        .await
        .map_err(|e| {
            error!(secret = %state.config.secret_name, error = %e, "Error retrieving secret");
            ApiError::from(e)
        })?;
    debug!("Secret retrieved");

    let expected = auth::expected_password(secret.as_deref()).map_err(|e| {
        error!("Secret has no usable password field");
        e
    })?;

    auth::verify(submitted, &expected).map_err(|e| {
        info!("Invalid password attempt");
        e
    })?;
    debug!("Password accepted, fetching content");

    let record = state
        .content
        .get_record(&state.config.content_record_id)
        .await
        .map_err(|e| {
            error!(table = %state.config.content_table, error = %e, "DynamoDB error");
            ApiError::from(e)
        })?
        .ok_or(ApiError::ContentNotFound)?;

    let content = record.html().ok_or(ApiError::ContentEmpty)?.to_string();
    debug!(content_length = content.len(), "Content record loaded");

    let photos = match &state.photos {
        Some(store) => Some(fetch_photos(store.as_ref(), &state.config).await),
        None => None,
    };

    let response = ContentResponse {
        content,
        last_updated: record.last_updated,
        photos,
    };

    Envelope::json(StatusCode::OK, &response).map_err(|e| {
        error!(error = %e, "Failed to serialize response");
        ApiError::Internal
    })
}

/// Gallery for a successful response. A listing failure yields no photos
/// rather than an error.
async fn fetch_photos(store: &dyn PhotoStore, config: &ApiConfig) -> Vec<Photo> {
    match list_photos(store, config.max_listed_photos, config.photo_url_expiry).await {
        Ok(photos) => {
            debug!(count = photos.len(), "Photos listed");
            photos
        }
        Err(e) => {
            warn!(bucket = %config.photo_bucket, error = %e, "Photo listing failed, serving without photos");
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod tests;
