//! Error types for the membership API client.
//!
//! # Design
//! Absent and duplicate members are not errors here either: the server
//! answers those with 200 and the client turns them into [`crate::Reply`]
//! variants. What remains is a status the operation never produces, a body
//! that is not the JSON envelope, or an envelope value that cannot be
//! classified.

use thiserror::Error;

/// Errors returned by `MembershipClient` parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The base URL does not parse or cannot carry path segments.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The server returned a status this operation never produces.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body is not a `{"id", "value"}` envelope.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The envelope carried a value the operation cannot produce.
    #[error("unexpected value {value:?} with HTTP {status}")]
    UnexpectedValue { status: u16, value: String },
}
