//! Bcrypt-backed password verification.

use async_trait::async_trait;

use shelf_core::errors::DomainError;
use shelf_core::repositories::PasswordVerifier;

/// `PasswordVerifier` over the bcrypt crate
pub struct BcryptVerifier;

impl BcryptVerifier {
    /// Hashes a plaintext password for storage; used when seeding
    pub fn hash(password: &str) -> Result<String, DomainError> {
        bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| DomainError::Internal {
            message: format!("password hashing failed: {e}"),
        })
    }
}

#[async_trait]
impl PasswordVerifier for BcryptVerifier {
    async fn verify(&self, candidate: &str, stored_hash: &str) -> Result<bool, DomainError> {
        bcrypt::verify(candidate, stored_hash).map_err(|e| DomainError::Internal {
            message: format!("password verification failed: {e}"),
        })
    }
}
