//! JWT signing configuration

use serde::{Deserialize, Serialize};

/// JWT authentication configuration
///
/// Constructed once at startup and passed into the token service; the
/// signing secret is never mutated at runtime.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Access token expiry time in seconds
    pub token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("your-secret-key-change-in-production"),
            token_expiry: 1800, // 30 minutes
            issuer: String::from("bookshelf"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set token expiry in minutes
    pub fn with_expiry_minutes(mut self, minutes: i64) -> Self {
        self.token_expiry = minutes * 60;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "your-secret-key-change-in-production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_flags_default_secret() {
        let config = JwtConfig::default();
        assert!(config.is_using_default_secret());

        let config = JwtConfig::new("real-secret");
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_expiry_minutes_builder() {
        let config = JwtConfig::default().with_expiry_minutes(15);
        assert_eq!(config.token_expiry, 900);
    }
}
