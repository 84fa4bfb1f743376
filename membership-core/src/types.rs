//! Wire DTOs and client-side replies for the membership API.
//!
//! # Design
//! `Member` mirrors the server's response envelope but is defined on its
//! own; the integration test against the real server catches drift.

use serde::{Deserialize, Serialize};

/// Envelope value meaning "absent" (or "already present" on create).
pub const NONE_SENTINEL: &str = "None";

/// Envelope value sent after a successful delete.
pub const REMOVED_SENTINEL: &str = "Removed";

/// The `{"id", "value"}` envelope every response carries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    pub id: String,
    pub value: String,
}

/// How POST/PUT bodies name the value field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldStyle {
    /// `value=<v>`
    #[default]
    Canonical,
    /// `<key>=<v>`, as older clients send it.
    KeyNamed,
}

/// Classified server answer for one membership operation.
///
/// A stored value that is literally `"None"` reads back as `NotFound`; the
/// wire format cannot tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Created(String),
    AlreadyExists,
    Found(String),
    Updated(String),
    Removed,
    NotFound,
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reply::Created(value) => write!(f, "created {value:?}"),
            Reply::AlreadyExists => f.write_str("already exists"),
            Reply::Found(value) => write!(f, "found {value:?}"),
            Reply::Updated(value) => write!(f, "updated to {value:?}"),
            Reply::Removed => f.write_str("removed"),
            Reply::NotFound => f.write_str("not found"),
        }
    }
}
