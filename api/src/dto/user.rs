//! User DTOs.

use serde::{Deserialize, Serialize};

use shelf_core::domain::entities::{Role, User};

/// User as exposed over the API; never carries the password hash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub username: String,
    pub role: Role,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            role: user.role,
        }
    }
}

/// Body of GET /users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<UserSummary>,
    pub token: String,
}
