//! Content record and endpoint response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::photo::{format_timestamp, Photo};

/// The singleton wedding content record.
///
/// Stored in DynamoDB under `{ id: "main" }`. `content` is raw HTML and is
/// served to the browser as-is.
///
/// Attributes other than the key are decoded as untyped values so a record
/// written by hand with odd attribute types still loads: `content` only counts
/// when it is a non-empty string, `lastUpdated` is passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    /// Partition key.
    pub id: String,

    /// HTML body of the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,

    /// Timestamp of the last write, ISO-8601 when written by the admin CLI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<Value>,
}

impl ContentRecord {
    /// Build a record for writing, stamping `lastUpdated` with `now`.
    pub fn stamped(id: impl Into<String>, content: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            content: Some(Value::String(content.into())),
            last_updated: Some(Value::String(format_timestamp(now))),
        }
    }

    /// The HTML content, if present and non-empty.
    pub fn html(&self) -> Option<&str> {
        self.content
            .as_ref()
            .and_then(Value::as_str)
            .filter(|c| !c.is_empty())
    }
}

/// Successful response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentResponse {
    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<Value>,

    /// Present only when the photo gallery is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<Photo>>,
}

/// Error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
