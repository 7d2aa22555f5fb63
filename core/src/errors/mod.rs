//! Domain-specific error types and error handling.
//!
//! Every failure is handled per-request and mapped to an HTTP status in the
//! API layer; nothing here crashes the process. Credential errors carry a
//! deliberately generic message to avoid username enumeration.

use thiserror::Error;

// Re-export the shared ErrorResponse so API code can build bodies from
// domain errors without importing shelf_shared directly.
pub use shelf_shared::types::response::ErrorResponse;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("username or password is incorrect")]
    InvalidCredentials,
}

/// Token-related errors
///
/// `TokenExpired` is kept distinct from `InvalidToken` so clients can tell
/// "log in again" apart from "malformed request".
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Missing required claim: {claim}")]
    MissingClaim { claim: String },
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Store error: {message}")]
    Store { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        let code = match err {
            DomainError::Validation { .. } => "validation_error",
            DomainError::NotFound { .. } => "not_found",
            DomainError::Forbidden { .. } => "forbidden",
            DomainError::Store { .. } => "store_error",
            DomainError::Internal { .. } => "internal_error",
            DomainError::Auth(_) => "authentication_failed",
            DomainError::Token(TokenError::TokenExpired) => "token_expired",
            DomainError::Token(_) => "token_invalid",
        };
        ErrorResponse::new(code, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_error_message_is_generic() {
        // Same message for unknown user and wrong password
        let err = AuthError::InvalidCredentials;
        assert_eq!(err.to_string(), "username or password is incorrect");
    }

    #[test]
    fn test_token_errors_are_distinct() {
        let expired: ErrorResponse = (&DomainError::Token(TokenError::TokenExpired)).into();
        let invalid: ErrorResponse = (&DomainError::Token(TokenError::InvalidToken)).into();
        assert_eq!(expired.error, "token_expired");
        assert_eq!(invalid.error, "token_invalid");
    }

    #[test]
    fn test_auth_error_bridges_into_domain_error() {
        let err: DomainError = AuthError::InvalidCredentials.into();
        assert!(matches!(err, DomainError::Auth(_)));
    }
}
