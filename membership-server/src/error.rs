//! Error types for the membership server.
//!
//! # Design
//! `RequestError` covers everything that can go wrong while turning a single
//! HTTP request into a store call. Each variant renders as the same JSON
//! envelope the success path uses, so clients only ever parse one shape.
//! Absent or duplicate keys are not errors; see [`crate::store::Outcome`].
//!
//! `ServerError` is reserved for process-level failures (binding, serving).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::response::MemberEnvelope;

/// A request that could not be mapped onto a store primitive.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The path does not have the `/membership_api/{key}` shape.
    #[error("Invalid URL path")]
    InvalidPath,

    /// POST body carried neither the canonical nor the key-named field.
    #[error("Value field missing in POST data")]
    MissingValue { key: String },

    /// The form body is not valid UTF-8.
    #[error("Invalid form body")]
    InvalidForm { key: String },

    #[error("Method not supported")]
    MethodNotAllowed { key: String },

    /// The body exceeded the transport's size limit.
    #[error("Request body too large")]
    BodyTooLarge { key: String },

    /// The transport failed while buffering the body.
    #[error("Error reading request body")]
    BodyRead { key: String, reason: String },
}

impl RequestError {
    pub fn status(&self) -> StatusCode {
        match self {
            RequestError::InvalidPath
            | RequestError::MissingValue { .. }
            | RequestError::InvalidForm { .. } => StatusCode::BAD_REQUEST,
            RequestError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            RequestError::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            RequestError::BodyRead { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Key echoed back in the envelope's `id` field. Empty when no key could
    /// be extracted from the path.
    pub fn key(&self) -> &str {
        match self {
            RequestError::InvalidPath => "",
            RequestError::MissingValue { key }
            | RequestError::InvalidForm { key }
            | RequestError::MethodNotAllowed { key }
            | RequestError::BodyTooLarge { key }
            | RequestError::BodyRead { key, .. } => key,
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        match &self {
            RequestError::BodyRead { key, reason } => {
                tracing::error!(key = %key, reason = %reason, "failed to read request body");
            }
            other => {
                tracing::warn!(key = %other.key(), status = %other.status(), "{other}");
            }
        }
        let envelope = MemberEnvelope::new(self.key(), self.to_string());
        envelope.with_status(self.status())
    }
}

/// Fatal errors that stop the server process.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server terminated: {0}")]
    Serve(#[from] std::io::Error),
}
