//! Response envelopes.
//!
//! Every invocation produces exactly one envelope, and every envelope carries
//! the same CORS header set, including the preflight answer and all errors.

use std::collections::BTreeMap;

use lambda_http::http::{self, StatusCode};
use lambda_http::{Body, Response};
use serde::Serialize;

use wedding_models::ErrorResponse;

/// CORS headers attached to every response.
pub const CORS_HEADERS: [(&str, &str); 4] = [
    ("Access-Control-Allow-Origin", "*"),
    (
        "Access-Control-Allow-Headers",
        "Content-Type, Authorization, X-Requested-With",
    ),
    ("Access-Control-Allow-Methods", "POST, OPTIONS, GET"),
    ("Access-Control-Max-Age", "86400"),
];

/// Body used when an error message cannot be serialized.
const FALLBACK_ERROR_BODY: &str = r#"{"error":"Internal server error"}"#;

/// Status code, headers and body of one response, in API Gateway proxy shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl Envelope {
    /// Create an envelope with the CORS header set.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            headers: CORS_HEADERS
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            body: body.into(),
        }
    }

    /// Answer to a CORS preflight request: 200 with an empty body.
    pub fn preflight() -> Self {
        Self::new(StatusCode::OK, "")
    }

    /// Serialize `value` as the JSON body.
    pub fn json<T: Serialize>(status: StatusCode, value: &T) -> serde_json::Result<Self> {
        Ok(Self::new(status, serde_json::to_string(value)?))
    }

    /// Error envelope with body `{"error": message}`.
    pub fn error(status: StatusCode, message: &str) -> Self {
        let body = serde_json::to_string(&ErrorResponse::new(message))
            .unwrap_or_else(|_| FALLBACK_ERROR_BODY.to_string());
        Self::new(status, body)
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Convert into a Lambda HTTP response.
    pub fn into_response(self) -> Result<Response<Body>, http::Error> {
        let mut builder = Response::builder().status(self.status());
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let body = if self.body.is_empty() {
            Body::Empty
        } else {
            Body::Text(self.body)
        };
        builder.body(body)
    }
}
