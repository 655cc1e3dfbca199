//! Session layer: one independent game per opaque session id.
//!
//! This is the surface a request-handling host calls into. It owns game
//! lifecycle (lazy creation, reset, removal) and turns engine results into
//! serializable responses.

pub mod response;
pub mod store;

use serde::{Deserialize, Serialize};

pub use response::{MoveResponse, PassResponse, ResetResponse, UndoResponse};
pub use store::SessionStore;

/// Opaque session identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
