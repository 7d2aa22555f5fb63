//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role attached to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full catalog management access
    Admin,
    /// Read-mostly library member
    Member,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Member => "member",
        }
    }
}

/// User entity representing a registered account
///
/// `audience` is the set of capability strings copied into every token
/// issued for this user; it is the single source of truth for what their
/// sessions may do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Login name; also the token subject
    pub username: String,

    /// Bcrypt hash of the password, never the plaintext
    pub password_hash: String,

    /// Role of the account
    pub role: Role,

    /// Capability strings granted to this user
    pub audience: Vec<String>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    pub fn new(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        role: Role,
        audience: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            password_hash: password_hash.into(),
            role,
            audience,
            created_at: Utc::now(),
        }
    }

    /// Checks whether the user holds a named capability
    pub fn has_capability(&self, capability: &str) -> bool {
        self.audience.iter().any(|c| c == capability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::{ADD_BOOK, SHOW_USERS};

    #[test]
    fn test_new_user_gets_unique_id() {
        let a = User::new("alice", "hash", Role::Member, vec![]);
        let b = User::new("bob", "hash", Role::Member, vec![]);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_capability_lookup() {
        let admin = User::new(
            "admin",
            "hash",
            Role::Admin,
            vec![SHOW_USERS.to_string(), ADD_BOOK.to_string()],
        );
        let member = User::new("reader", "hash", Role::Member, vec![]);

        assert!(admin.has_capability(SHOW_USERS));
        assert!(admin.has_capability(ADD_BOOK));
        assert!(!member.has_capability(SHOW_USERS));
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Admin).unwrap();
        assert_eq!(json, "\"admin\"");
    }
}
