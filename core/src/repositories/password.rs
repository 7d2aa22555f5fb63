//! Password verification trait.
//!
//! Hashing and verification are external collaborators; the core only
//! sees a boolean answer and never the hashing scheme.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Verifies a candidate password against a stored hash
#[async_trait]
pub trait PasswordVerifier: Send + Sync {
    /// `Ok(true)` when the candidate matches the stored hash
    async fn verify(&self, candidate: &str, stored_hash: &str) -> Result<bool, DomainError>;
}

/// Mock verifier for testing: treats the stored "hash" as plaintext
pub struct MockPasswordVerifier;

#[async_trait]
impl PasswordVerifier for MockPasswordVerifier {
    async fn verify(&self, candidate: &str, stored_hash: &str) -> Result<bool, DomainError> {
        Ok(candidate == stored_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_verifier_compares_plaintext() {
        let verifier = MockPasswordVerifier;
        assert!(verifier.verify("secret", "secret").await.unwrap());
        assert!(!verifier.verify("wrong", "secret").await.unwrap());
    }
}
