//! Shared identity types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role assigned to an authenticated user.
///
/// The backend issues exactly these three roles; dashboards branch on this
/// value to decide what to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Admin,
    Reader,
}

impl Role {
    /// Wire representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Admin => "admin",
            Role::Reader => "reader",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cached projection of the authenticated user.
///
/// Held for the lifetime of the session so dashboards and forms can branch on
/// the role without a round trip. The backend remains the source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub contact: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_id: Option<String>,
}
