//! Stateless HTTP request builder and response parser for the membership API.
//!
//! # Design
//! `MembershipClient` holds only the parsed base URL and the body field
//! style. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Keys are pushed as a single percent-encoded path segment, so a key
//! containing `/` can never address a different route.

use url::{form_urlencoded, Url};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{FieldStyle, Member, Reply, NONE_SENTINEL, REMOVED_SENTINEL};

const API_SEGMENT: &str = "membership_api";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Synchronous, stateless client for the membership API.
#[derive(Debug, Clone)]
pub struct MembershipClient {
    base: Url,
    field_style: FieldStyle,
}

impl MembershipClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            base,
            field_style: FieldStyle::default(),
        })
    }

    pub fn with_field_style(mut self, field_style: FieldStyle) -> Self {
        self.field_style = field_style;
        self
    }

    pub fn field_style(&self) -> FieldStyle {
        self.field_style
    }

    pub fn build_create(&self, key: &str, value: &str) -> HttpRequest {
        self.form_request(HttpMethod::Post, key, value)
    }

    pub fn build_read(&self, key: &str) -> HttpRequest {
        self.bare_request(HttpMethod::Get, key)
    }

    pub fn build_update(&self, key: &str, value: &str) -> HttpRequest {
        self.form_request(HttpMethod::Put, key, value)
    }

    pub fn build_delete(&self, key: &str) -> HttpRequest {
        self.bare_request(HttpMethod::Delete, key)
    }

    /// 201 means the member was stored; 200 with the `"None"` sentinel
    /// means it already existed.
    pub fn parse_create(&self, response: HttpResponse) -> Result<Reply, ApiError> {
        match response.status {
            201 => Ok(Reply::Created(envelope(&response)?.value)),
            200 => {
                let member = envelope(&response)?;
                if member.value == NONE_SENTINEL {
                    Ok(Reply::AlreadyExists)
                } else {
                    Err(unexpected(&response, member))
                }
            }
            _ => Err(http_error(response)),
        }
    }

    pub fn parse_read(&self, response: HttpResponse) -> Result<Reply, ApiError> {
        let member = ok_envelope(&response)?;
        Ok(sentinel_or(member.value, Reply::Found))
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<Reply, ApiError> {
        let member = ok_envelope(&response)?;
        Ok(sentinel_or(member.value, Reply::Updated))
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<Reply, ApiError> {
        let member = ok_envelope(&response)?;
        match member.value.as_str() {
            REMOVED_SENTINEL => Ok(Reply::Removed),
            NONE_SENTINEL => Ok(Reply::NotFound),
            _ => Err(unexpected(&response, member)),
        }
    }

    fn member_url(&self, key: &str) -> String {
        let mut url = self.base.clone();
        // `new` rejected cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(API_SEGMENT).push(key);
        }
        url.into()
    }

    fn bare_request(&self, method: HttpMethod, key: &str) -> HttpRequest {
        HttpRequest {
            method,
            path: self.member_url(key),
            headers: Vec::new(),
            body: None,
        }
    }

    fn form_request(&self, method: HttpMethod, key: &str, value: &str) -> HttpRequest {
        let field = match self.field_style {
            FieldStyle::Canonical => "value",
            FieldStyle::KeyNamed => key,
        };
        let body = form_urlencoded::Serializer::new(String::new())
            .append_pair(field, value)
            .finish();
        HttpRequest {
            method,
            path: self.member_url(key),
            headers: vec![("content-type".to_string(), FORM_CONTENT_TYPE.to_string())],
            body: Some(body),
        }
    }
}

fn envelope(response: &HttpResponse) -> Result<Member, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Envelope of a response that must be 200.
fn ok_envelope(response: &HttpResponse) -> Result<Member, ApiError> {
    if response.status != 200 {
        return Err(http_error(response.clone()));
    }
    envelope(response)
}

fn sentinel_or(value: String, present: fn(String) -> Reply) -> Reply {
    if value == NONE_SENTINEL {
        Reply::NotFound
    } else {
        present(value)
    }
}

fn http_error(response: HttpResponse) -> ApiError {
    ApiError::HttpError {
        status: response.status,
        body: response.body,
    }
}

fn unexpected(response: &HttpResponse, member: Member) -> ApiError {
    ApiError::UnexpectedValue {
        status: response.status,
        value: member.value,
    }
}
