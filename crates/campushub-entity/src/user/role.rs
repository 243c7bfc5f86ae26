//! User role enumeration.

use serde::{Deserialize, Serialize};

/// Role claimed by the identity service for the authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Portal administrator (manages events and announcements).
    Admin,
    /// Regular community member.
    Member,
}

impl UserRole {
    /// Return the role as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
