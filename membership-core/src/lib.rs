//! Synchronous API client core for the membership service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, keeping the core deterministic and testable.
//!
//! # Design
//! - `MembershipClient` is stateless; it holds the base URL and the body
//!   field style.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Responses are classified into [`Reply`] so callers never compare
//!   against the `"None"`/`"Removed"` wire sentinels themselves.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::MembershipClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{FieldStyle, Member, Reply};
