//! Request routing and CRUD handlers for `/membership_api/{key}`.
//!
//! # Design
//! Path and body parsing happen in extractors before a handler touches the
//! store, so the store lock is only held for the map operation itself.
//! Requests that do not match the route pattern hit the router fallback
//! (400); well-formed paths with an unmapped method hit the method fallback
//! (405). Neither reaches the store.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequestParts, Path, State},
    http::{request::Parts, StatusCode},
    routing::get,
    Router,
};

use crate::{
    config::RouterOptions,
    error::RequestError,
    form::FormBody,
    response::MemberReply,
    store::{Outcome, SharedStore},
};

/// Route pattern served by the membership API.
pub const MEMBER_ROUTE: &str = "/membership_api/{key}";

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub options: RouterOptions,
}

/// Member key taken from the single path segment after the API prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberKey(pub String);

impl<S> FromRequestParts<S> for MemberKey
where
    S: Send + Sync,
{
    type Rejection = RequestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(key) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| RequestError::InvalidPath)?;
        // A percent-encoded `/` would otherwise smuggle a nested path in.
        if key.is_empty() || key.contains('/') {
            return Err(RequestError::InvalidPath);
        }
        Ok(MemberKey(key))
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            MEMBER_ROUTE,
            get(read_member)
                .post(create_member)
                .put(update_member)
                .delete(delete_member)
                .fallback(unsupported_method),
        )
        .fallback(invalid_path)
        .with_state(state)
}

/// Oversized bodies are the client's fault; any other buffering failure is
/// a transport error.
fn buffered(key: &str, body: Result<Bytes, BytesRejection>) -> Result<Bytes, RequestError> {
    body.map_err(|rejection| {
        let key = key.to_string();
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            RequestError::BodyTooLarge { key }
        } else {
            RequestError::BodyRead {
                key,
                reason: rejection.body_text(),
            }
        }
    })
}

fn reply(key: String, outcome: Outcome) -> MemberReply {
    tracing::debug!(key = %key, ?outcome, "store outcome");
    MemberReply { key, outcome }
}

async fn create_member(
    State(state): State<AppState>,
    MemberKey(key): MemberKey,
    body: Result<Bytes, BytesRejection>,
) -> Result<MemberReply, RequestError> {
    let body = buffered(&key, body)?;
    let value = FormBody::decode(&key, &body)?
        .member_value(&key, state.options.legacy_key_field)
        .ok_or_else(|| RequestError::MissingValue { key: key.clone() })?;
    let outcome = state.store.create(&key, value).await;
    Ok(reply(key, outcome))
}

async fn read_member(State(state): State<AppState>, MemberKey(key): MemberKey) -> MemberReply {
    let outcome = state.store.read(&key).await;
    reply(key, outcome)
}

async fn update_member(
    State(state): State<AppState>,
    MemberKey(key): MemberKey,
    body: Result<Bytes, BytesRejection>,
) -> Result<MemberReply, RequestError> {
    let body = buffered(&key, body)?;
    let value = FormBody::decode(&key, &body)?
        .member_value(&key, state.options.legacy_key_field)
        .unwrap_or_default();
    let outcome = state.store.update(&key, value).await;
    Ok(reply(key, outcome))
}

async fn delete_member(State(state): State<AppState>, MemberKey(key): MemberKey) -> MemberReply {
    let outcome = state.store.delete(&key).await;
    reply(key, outcome)
}

async fn unsupported_method(key: Result<MemberKey, RequestError>) -> RequestError {
    match key {
        Ok(MemberKey(key)) => RequestError::MethodNotAllowed { key },
        Err(err) => err,
    }
}

async fn invalid_path() -> RequestError {
    RequestError::InvalidPath
}
