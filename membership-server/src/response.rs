//! JSON envelope returned for every membership request.
//!
//! # Design
//! Every response, success or failure, is `{"id": <key>, "value": <string>}`
//! with `Content-Type: application/json`. Store outcomes stay typed until
//! this module; the `"None"` and `"Removed"` sentinels exist only on the
//! wire.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::store::Outcome;

/// Wire value sent when the key was absent, or already present on create.
pub const NONE_SENTINEL: &str = "None";

/// Wire value sent after a successful delete.
pub const REMOVED_SENTINEL: &str = "Removed";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberEnvelope {
    pub id: String,
    pub value: String,
}

impl MemberEnvelope {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }

    /// Render an outcome for `key` into its status code and envelope.
    pub fn from_outcome(key: &str, outcome: Outcome) -> (StatusCode, Self) {
        let (status, value) = match outcome {
            Outcome::Created(value) => (StatusCode::CREATED, value),
            Outcome::Found(value) | Outcome::Updated(value) => (StatusCode::OK, value),
            Outcome::Removed => (StatusCode::OK, REMOVED_SENTINEL.to_string()),
            Outcome::AlreadyExists | Outcome::NotFound => {
                (StatusCode::OK, NONE_SENTINEL.to_string())
            }
        };
        (status, Self::new(key, value))
    }

    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// A store outcome bound to the key it was computed for.
#[derive(Debug)]
pub struct MemberReply {
    pub key: String,
    pub outcome: Outcome,
}

impl IntoResponse for MemberReply {
    fn into_response(self) -> Response {
        let (status, envelope) = MemberEnvelope::from_outcome(&self.key, self.outcome);
        envelope.with_status(status)
    }
}
