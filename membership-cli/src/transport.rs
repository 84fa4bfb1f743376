//! Executes core-built requests over real HTTP.

use membership_core::{HttpMethod, HttpRequest, HttpResponse};
use ureq::Agent;

use crate::error::CliError;

/// Performs the round-trip for a request built by `membership-core`.
pub trait Transport {
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, CliError>;
}

pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    /// 4xx/5xx come back as data so the core client can classify them.
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn content_type(req: &HttpRequest) -> Option<&str> {
    req.headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
        .map(|(_, value)| value.as_str())
}

impl Transport for UreqTransport {
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, CliError> {
        tracing::debug!(method = req.method.as_str(), path = %req.path, "sending request");

        let mut response = match (req.method, req.body.as_deref()) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call()?,
            (HttpMethod::Delete, _) => self.agent.delete(&req.path).call()?,
            (HttpMethod::Post, body) => {
                let mut builder = self.agent.post(&req.path);
                if let Some(ct) = content_type(&req) {
                    builder = builder.content_type(ct);
                }
                builder.send(body.unwrap_or_default().as_bytes())?
            }
            (HttpMethod::Put, body) => {
                let mut builder = self.agent.put(&req.path);
                if let Some(ct) = content_type(&req) {
                    builder = builder.content_type(ct);
                }
                builder.send(body.unwrap_or_default().as_bytes())?
            }
        };

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_string()?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
