//! Session DTOs.

use serde::{Deserialize, Serialize};

use shelf_core::domain::entities::Role;

/// Body of a successful POST /login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub username: String,
    pub role: Role,
    pub token: String,
}

/// Body of GET /logout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// Message plus a session token
///
/// Used both for successes that refresh the token and for 403/500 paths
/// that echo the presented token back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageTokenResponse {
    pub message: String,
    pub token: String,
}
