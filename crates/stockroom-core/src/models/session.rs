//! Session domain model.

use serde::{Deserialize, Serialize};

use super::identity::{Identity, Role};

/// The currently authenticated identity and its credential token.
///
/// A `Session` always holds both halves; "not authenticated" is the
/// absence of a `Session`, not a flag on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub identity: Identity,
    /// Opaque capability proof. Never parsed.
    pub token: String,
}

impl Session {
    pub fn new(identity: Identity, token: impl Into<String>) -> Self {
        Self {
            identity,
            token: token.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.identity.role
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.identity.role == role
    }
}
