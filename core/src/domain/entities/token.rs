//! Token claims for JWT-based sessions.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default JWT issuer
pub const JWT_ISSUER: &str = "bookshelf";

/// Claims structure for the JWT payload
///
/// Every field is required; decoding rejects payloads that omit any of
/// them. A token is immutable once issued — refreshing mints a distinct
/// token with a new `jti`, never mutates an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Audience: capability strings granted to the subject
    pub aud: Vec<String>,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates claims for a new session token
    pub fn new(
        subject: impl Into<String>,
        audience: Vec<String>,
        ttl_seconds: i64,
        issuer: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_seconds);

        Self {
            sub: subject.into(),
            aud: audience,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.into(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Checks if the claims are currently valid
    pub fn is_valid(&self) -> bool {
        !self.is_expired()
    }
}
